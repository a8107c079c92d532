//! Absolute instants as continuous Julian day counts (UT).

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar, weekday_index};

/// A moment in time as a Julian Date on the UT scale.
///
/// Always UTC-referenced; civil offsets are applied only at the
/// conversion boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant {
    jd_ut: f64,
}

impl Instant {
    pub const fn from_jd_ut(jd_ut: f64) -> Self {
        Self { jd_ut }
    }

    pub const fn jd_ut(self) -> f64 {
        self.jd_ut
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self {
            jd_ut: self.jd_ut + days,
        }
    }

    /// Signed days elapsed from `earlier` to `self`.
    pub fn days_since(self, earlier: Instant) -> f64 {
        self.jd_ut - earlier.jd_ut
    }

    /// Instant of a UTC calendar date-time.
    pub fn from_utc(utc: NaiveDateTime) -> Self {
        use chrono::{Datelike, Timelike};
        let seconds = f64::from(utc.num_seconds_from_midnight())
            + f64::from(utc.nanosecond()) * 1e-9;
        let day_frac = f64::from(utc.day()) + seconds / SECONDS_PER_DAY;
        Self::from_jd_ut(calendar_to_jd(utc.year(), utc.month(), day_frac))
    }

    /// Instant of a local civil date-time observed at `offset_hours` east of UTC.
    pub fn from_local(local: NaiveDateTime, offset_hours: f64) -> Self {
        Self::from_utc(local).add_days(-offset_hours / 24.0)
    }

    /// UTC calendar date-time, rounded to the millisecond.
    pub fn to_utc(self) -> Result<NaiveDateTime, TimeError> {
        let millis = ((self.jd_ut - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
        if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
            return Err(TimeError::OutOfRange);
        }
        DateTime::from_timestamp_millis(millis as i64)
            .map(|dt| dt.naive_utc())
            .ok_or(TimeError::OutOfRange)
    }

    /// Local civil date-time at `offset_hours` east of UTC.
    pub fn to_local(self, offset_hours: f64) -> Result<NaiveDateTime, TimeError> {
        self.add_days(offset_hours / 24.0).to_utc()
    }

    /// UT weekday index: 0 = Sunday … 6 = Saturday.
    pub fn weekday_index(self) -> u8 {
        weekday_index(self.jd_ut)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day_frac) = jd_to_calendar(self.jd_ut);
        let day = day_frac.floor();
        let total_seconds = ((day_frac - day) * SECONDS_PER_DAY).round() as u32;
        // Rounding up to midnight is printed as 23:59:59 rather than rolling the date.
        let total_seconds = total_seconds.min(86_399);
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            year,
            month,
            day as u32,
            total_seconds / 3600,
            (total_seconds % 3600) / 60,
            total_seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn j2000_from_utc() {
        let i = Instant::from_utc(dt(2000, 1, 1, 12, 0, 0));
        assert!((i.jd_ut() - crate::J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn local_offset_moves_earlier() {
        // 05:30 in UTC+05:30 is midnight UTC.
        let local = Instant::from_local(dt(2024, 3, 20, 5, 30, 0), 5.5);
        let utc = Instant::from_utc(dt(2024, 3, 20, 0, 0, 0));
        assert!((local.jd_ut() - utc.jd_ut()).abs() < 1e-9);
    }

    #[test]
    fn utc_roundtrip() {
        let t = dt(1987, 6, 14, 18, 42, 7);
        assert_eq!(Instant::from_utc(t).to_utc().unwrap(), t);
    }

    #[test]
    fn to_local_applies_offset() {
        let i = Instant::from_utc(dt(2024, 1, 1, 22, 0, 0));
        assert_eq!(i.to_local(5.5).unwrap(), dt(2024, 1, 2, 3, 30, 0));
    }

    #[test]
    fn add_days_and_days_since() {
        let a = Instant::from_jd_ut(2_460_000.5);
        let b = a.add_days(1.25);
        assert!((b.days_since(a) - 1.25).abs() < 1e-12);
        assert!(b > a);
    }

    #[test]
    fn display_iso() {
        let i = Instant::from_utc(dt(2024, 1, 15, 0, 0, 0));
        assert_eq!(i.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn non_finite_is_out_of_range() {
        assert_eq!(
            Instant::from_jd_ut(f64::NAN).to_utc(),
            Err(TimeError::OutOfRange)
        );
    }
}
