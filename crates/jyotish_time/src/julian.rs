//! Julian Date ↔ proleptic Gregorian calendar conversions.
//!
//! Algorithms follow Meeus, *Astronomical Algorithms*, ch. 7, with the
//! Gregorian correction applied unconditionally (no Julian-calendar switch
//! before 1582-10-15).

/// Julian Date of J2000.0 (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a calendar date with fractional day to a Julian Date.
///
/// `day_frac` is the day of month plus the fraction of the day elapsed,
/// e.g. `1.5` for noon on the first.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (f64::from(y) / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (f64::from(y) + 4716.0)).floor() + (30.6001 * (f64::from(m) + 1.0)).floor()
        + day_frac
        + b
        - 1524.5
}

/// Convert a Julian Date to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

/// Weekday index of the civil day containing `jd` (UT): 0 = Sunday … 6 = Saturday.
pub fn weekday_index(jd: f64) -> u8 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert!((calendar_to_jd(2000, 1, 1.5) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn unix_epoch() {
        assert!((calendar_to_jd(1970, 1, 1.0) - UNIX_EPOCH_JD).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_7a() {
        // 1957 October 4.81 (Sputnik 1)
        assert!((calendar_to_jd(1957, 10, 4.81) - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn proleptic_before_reform() {
        // 1582-10-14 Gregorian exists proleptically; one day before the reform date.
        let reform = calendar_to_jd(1582, 10, 15.0);
        let before = calendar_to_jd(1582, 10, 14.0);
        assert!((reform - before - 1.0).abs() < 1e-9);
    }

    #[test]
    fn calendar_roundtrip_leap_day() {
        let jd = calendar_to_jd(2024, 2, 29.25);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2024, 2));
        assert!((d - 29.25).abs() < 1e-9);
    }

    #[test]
    fn weekday_known_dates() {
        // 2000-01-01 was a Saturday, 2024-01-01 a Monday.
        assert_eq!(weekday_index(calendar_to_jd(2000, 1, 1.0)), 6);
        assert_eq!(weekday_index(calendar_to_jd(2024, 1, 1.75)), 1);
    }
}
