//! Panchang elements from sidereal Sun and Moon longitudes.
//!
//! - Tithi: 30 lunar days of 12° Moon–Sun elongation each.
//! - Karana: 60 half-tithis of 6°; four fixed karanas occupy positions
//!   0 and 57..=59, the seven movable ones cycle through 1..=56.
//! - Yoga: 27 divisions of 13°20' of the Sun + Moon sum.
//! - Vaar: the weekday and its planetary lord.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::util::normalize_360;

// ---------------------------------------------------------------------------
// Tithi
// ---------------------------------------------------------------------------

pub const TITHI_SPAN: f64 = 12.0;

const TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing half, tithis 1..=15.
    Shukla,
    /// Waning half, tithis 16..=30.
    Krishna,
}

/// Fivefold tithi classification, repeating every five tithis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TithiGroup {
    Nanda,
    Bhadra,
    Jaya,
    Rikta,
    Purna,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiInfo {
    /// 1..=30 (15 = Purnima, 30 = Amavasya).
    pub number: u8,
    pub name: &'static str,
    pub paksha: Paksha,
    pub group: TithiGroup,
    /// Degrees of elongation elapsed within this tithi, [0, 12).
    pub degrees_in_tithi: f64,
}

impl TithiInfo {
    /// Day within the paksha, 1..=15.
    pub const fn paksha_day(&self) -> u8 {
        (self.number - 1) % 15 + 1
    }
}

pub fn tithi_from_longitudes(sun_sidereal: f64, moon_sidereal: f64) -> TithiInfo {
    let elongation = normalize_360(moon_sidereal - sun_sidereal);
    let idx = ((elongation / TITHI_SPAN).floor() as u8).min(29);
    let number = idx + 1;
    let paksha_day = idx % 15 + 1;
    let name = if number == 30 {
        "Amavasya"
    } else {
        TITHI_NAMES[(paksha_day - 1) as usize]
    };
    let group = match (paksha_day - 1) % 5 {
        0 => TithiGroup::Nanda,
        1 => TithiGroup::Bhadra,
        2 => TithiGroup::Jaya,
        3 => TithiGroup::Rikta,
        _ => TithiGroup::Purna,
    };
    TithiInfo {
        number,
        name,
        paksha: if number <= 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        },
        group,
        degrees_in_tithi: elongation - f64::from(idx) * TITHI_SPAN,
    }
}

/// Auspicious tithis: paksha days 2, 3, 5, 7, 10, 11, 13 and Purnima.
pub fn is_auspicious_tithi(number: u8) -> bool {
    if number == 15 {
        return true;
    }
    let paksha_day = (number.clamp(1, 30) - 1) % 15 + 1;
    matches!(paksha_day, 2 | 3 | 5 | 7 | 10 | 11 | 13)
}

// ---------------------------------------------------------------------------
// Karana
// ---------------------------------------------------------------------------

pub const KARANA_SPAN: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Movable karanas other than Vishti, plus Kimstughna, are auspicious.
    pub const fn is_auspicious(self) -> bool {
        !matches!(
            self,
            Self::Vishti | Self::Shakuni | Self::Chatushpada | Self::Naga
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// 0..=59 half-tithi position in the synodic month.
    pub index: u8,
}

pub fn karana_from_longitudes(sun_sidereal: f64, moon_sidereal: f64) -> KaranaInfo {
    let elongation = normalize_360(moon_sidereal - sun_sidereal);
    let index = ((elongation / KARANA_SPAN).floor() as u8).min(59);
    let karana = match index {
        0 => Karana::Kimstughna,
        57 => Karana::Shakuni,
        58 => Karana::Chatushpada,
        59 => Karana::Naga,
        i => MOVABLE_KARANAS[((i - 1) % 7) as usize],
    };
    KaranaInfo { karana, index }
}

// ---------------------------------------------------------------------------
// Yoga
// ---------------------------------------------------------------------------

pub const YOGA_SPAN: f64 = 360.0 / 27.0;

pub const YOGA_NAMES: [&str; 27] = [
    "Vishkumbha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YogaInfo {
    /// 1..=27.
    pub number: u8,
    pub name: &'static str,
}

pub fn yoga_from_longitudes(sun_sidereal: f64, moon_sidereal: f64) -> YogaInfo {
    let sum = normalize_360(sun_sidereal + moon_sidereal);
    let idx = ((sum / YOGA_SPAN).floor() as u8).min(26);
    YogaInfo {
        number: idx + 1,
        name: YOGA_NAMES[idx as usize],
    }
}

// ---------------------------------------------------------------------------
// Vaar
// ---------------------------------------------------------------------------

const VAAR_NAMES: [&str; 7] = [
    "Ravivaar",
    "Somvaar",
    "Mangalvaar",
    "Budhvaar",
    "Guruvaar",
    "Shukravaar",
    "Shanivaar",
];

const VAAR_LORDS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VaarInfo {
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u8,
    pub name: &'static str,
    pub lord: Graha,
}

/// Lord of a weekday (0 = Sunday), wrapping modulo 7.
pub const fn vaar_lord(weekday: u8) -> Graha {
    VAAR_LORDS[(weekday % 7) as usize]
}

pub const fn vaar_from_weekday(weekday: u8) -> VaarInfo {
    let weekday = weekday % 7;
    VaarInfo {
        weekday,
        name: VAAR_NAMES[weekday as usize],
        lord: VAAR_LORDS[weekday as usize],
    }
}

// ---------------------------------------------------------------------------
// Combined
// ---------------------------------------------------------------------------

/// The five daily almanac elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Panchang {
    pub tithi: TithiInfo,
    pub karana: KaranaInfo,
    pub yoga: YogaInfo,
    pub nakshatra: NakshatraInfo,
    pub vaar: VaarInfo,
}

pub fn panchang(sun_sidereal: f64, moon_sidereal: f64, weekday: u8) -> Panchang {
    Panchang {
        tithi: tithi_from_longitudes(sun_sidereal, moon_sidereal),
        karana: karana_from_longitudes(sun_sidereal, moon_sidereal),
        yoga: yoga_from_longitudes(sun_sidereal, moon_sidereal),
        nakshatra: nakshatra_from_longitude(moon_sidereal),
        vaar: vaar_from_weekday(weekday),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_moon_and_full_moon() {
        let t = tithi_from_longitudes(100.0, 100.5);
        assert_eq!(t.number, 1);
        assert_eq!(t.paksha, Paksha::Shukla);
        assert_eq!(t.group, TithiGroup::Nanda);

        let full = tithi_from_longitudes(10.0, 10.0 + 170.0);
        assert_eq!(full.number, 15);
        assert_eq!(full.name, "Purnima");
        assert_eq!(full.group, TithiGroup::Purna);

        let dark = tithi_from_longitudes(10.0, 5.0);
        assert_eq!(dark.number, 30);
        assert_eq!(dark.name, "Amavasya");
        assert_eq!(dark.paksha, Paksha::Krishna);
    }

    #[test]
    fn rikta_days() {
        for n in [4u8, 9, 14, 19, 24, 29] {
            let t = tithi_from_longitudes(0.0, f64::from(n - 1) * 12.0 + 1.0);
            assert_eq!(t.group, TithiGroup::Rikta, "tithi {n}");
            assert!(!is_auspicious_tithi(n));
        }
    }

    #[test]
    fn auspicious_tithis() {
        assert!(is_auspicious_tithi(2));
        assert!(is_auspicious_tithi(15));
        assert!(is_auspicious_tithi(26));
        assert!(!is_auspicious_tithi(30));
        assert!(!is_auspicious_tithi(8));
    }

    #[test]
    fn karana_sequence() {
        assert_eq!(karana_from_longitudes(0.0, 1.0).karana, Karana::Kimstughna);
        assert_eq!(karana_from_longitudes(0.0, 7.0).karana, Karana::Bava);
        assert_eq!(karana_from_longitudes(0.0, 43.0).karana, Karana::Vishti);
        assert_eq!(karana_from_longitudes(0.0, 49.0).karana, Karana::Bava);
        assert_eq!(karana_from_longitudes(0.0, 337.0).karana, Karana::Vishti);
        assert_eq!(karana_from_longitudes(0.0, 343.0).karana, Karana::Shakuni);
        assert_eq!(karana_from_longitudes(0.0, 359.0).karana, Karana::Naga);
    }

    #[test]
    fn yoga_numbers() {
        assert_eq!(yoga_from_longitudes(0.0, 1.0).number, 1);
        assert_eq!(yoga_from_longitudes(200.0, 159.9).name, "Vaidhriti");
    }

    #[test]
    fn vaar() {
        assert_eq!(vaar_from_weekday(0).lord, Graha::Surya);
        assert_eq!(vaar_from_weekday(4).name, "Guruvaar");
        assert_eq!(vaar_lord(13), Graha::Shani);
    }
}
