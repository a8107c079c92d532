//! Vimshottari dasha: mahadasha and antardasha periods.
//!
//! The birth balance comes from the Moon's position within its nakshatra:
//! the first mahadasha belongs to the nakshatra's star lord and the elapsed
//! fraction of the nakshatra is the elapsed fraction of that period. The
//! first mahadasha therefore starts before birth.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN_27, nakshatra_from_longitude};
use crate::vimshottari::{
    DAYS_PER_YEAR, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, cycle_from, vimshottari_index,
    vimshottari_years,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub lord: Graha,
    pub level: DashaLevel,
    pub start_jd: f64,
    pub end_jd: f64,
}

impl DashaPeriod {
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }

    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// The mahadasha and antardasha in force at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActiveDasha {
    pub mahadasha: DashaPeriod,
    pub antardasha: DashaPeriod,
}

/// Mahadashas from birth until they cover `until_jd`.
pub fn mahadashas(birth_jd: f64, moon_sidereal: f64, until_jd: f64) -> Vec<DashaPeriod> {
    let nak = nakshatra_from_longitude(moon_sidereal);
    let elapsed_fraction = nak.degrees_in_nakshatra / NAKSHATRA_SPAN_27;
    let first = nak.lord;
    let first_days = vimshottari_years(first) * DAYS_PER_YEAR;

    let mut periods = Vec::new();
    let mut cursor = birth_jd - elapsed_fraction * first_days;
    let mut idx = vimshottari_index(first);
    loop {
        let lord = VIMSHOTTARI_SEQUENCE[idx];
        let end = cursor + vimshottari_years(lord) * DAYS_PER_YEAR;
        periods.push(DashaPeriod {
            lord,
            level: DashaLevel::Mahadasha,
            start_jd: cursor,
            end_jd: end,
        });
        if end > until_jd {
            break;
        }
        cursor = end;
        idx = (idx + 1) % 9;
    }
    periods
}

/// Antardashas of a mahadasha, proportional to Vimshottari years and
/// starting from the mahadasha lord.
pub fn antardashas(maha: &DashaPeriod) -> Vec<DashaPeriod> {
    let duration = maha.duration_days();
    let mut cursor = maha.start_jd;
    let mut children: Vec<DashaPeriod> = cycle_from(maha.lord)
        .map(|lord| {
            let end = cursor + vimshottari_years(lord) / VIMSHOTTARI_TOTAL_YEARS * duration;
            let period = DashaPeriod {
                lord,
                level: DashaLevel::Antardasha,
                start_jd: cursor,
                end_jd: end,
            };
            cursor = end;
            period
        })
        .collect();
    // Absorb floating-point drift into the last child.
    if let Some(last) = children.last_mut() {
        last.end_jd = maha.end_jd;
    }
    children
}

/// Dasha in force at `jd`; `None` before birth.
pub fn active_dasha(birth_jd: f64, moon_sidereal: f64, jd: f64) -> Option<ActiveDasha> {
    if jd < birth_jd {
        return None;
    }
    let mahadasha = mahadashas(birth_jd, moon_sidereal, jd)
        .into_iter()
        .find(|p| p.contains(jd))?;
    let antars = antardashas(&mahadasha);
    let antardasha = antars
        .iter()
        .find(|p| p.contains(jd))
        .or(antars.last())
        .copied()?;
    Some(ActiveDasha {
        mahadasha,
        antardasha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIRTH: f64 = 2_451_545.0;

    #[test]
    fn first_period_balance() {
        // Moon at the middle of Ashwini: half of Ketu's 7 years remains.
        let mid = NAKSHATRA_SPAN_27 / 2.0;
        let periods = mahadashas(BIRTH, mid, BIRTH);
        assert_eq!(periods[0].lord, Graha::Ketu);
        let remaining = periods[0].end_jd - BIRTH;
        assert!((remaining - 3.5 * DAYS_PER_YEAR).abs() < 1e-6);
    }

    #[test]
    fn sequence_follows_cycle() {
        let periods = mahadashas(BIRTH, 40.0 + 1e-9, BIRTH + 50.0 * DAYS_PER_YEAR);
        let lords: Vec<_> = periods.iter().map(|p| p.lord).collect();
        assert_eq!(lords[..4], [Graha::Chandra, Graha::Mangal, Graha::Rahu, Graha::Guru]);
        for w in periods.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd);
        }
    }

    #[test]
    fn antardashas_partition_parent() {
        let maha = DashaPeriod {
            lord: Graha::Shukra,
            level: DashaLevel::Mahadasha,
            start_jd: 0.0,
            end_jd: 20.0 * DAYS_PER_YEAR,
        };
        let antars = antardashas(&maha);
        assert_eq!(antars.len(), 9);
        assert_eq!(antars[0].lord, Graha::Shukra);
        assert_eq!(antars[1].lord, Graha::Surya);
        // Venus-Venus is 20*20/120 = 3.333 years
        assert!((antars[0].duration_days() - 20.0 * 20.0 / 120.0 * DAYS_PER_YEAR).abs() < 1e-9);
        assert_eq!(antars[8].end_jd, maha.end_jd);
    }

    #[test]
    fn active_dasha_after_cycle_wrap() {
        // 130 years after birth the cycle has wrapped once.
        let jd = BIRTH + 130.0 * DAYS_PER_YEAR;
        let active = active_dasha(BIRTH, 0.0, jd).unwrap();
        assert!(active.mahadasha.contains(jd));
        assert!(active.antardasha.contains(jd));
        // Ketu 0..7, Venus 7..27 into the second cycle at 120..: 130 is in Venus.
        assert_eq!(active.mahadasha.lord, Graha::Shukra);
    }

    #[test]
    fn none_before_birth() {
        assert!(active_dasha(BIRTH, 100.0, BIRTH - 1.0).is_none());
    }
}
