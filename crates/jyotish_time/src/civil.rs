//! Civil date/time parsing and the local → [`Instant`] normalizer.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

use crate::error::TimeError;
use crate::instant::Instant;
use crate::zone::TzSpec;

const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Parse `DD/MM/YYYY` or `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| TimeError::invalid("date", s, "expected DD/MM/YYYY or YYYY-MM-DD"))
}

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> Result<NaiveTime, TimeError> {
    let s = s.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| TimeError::invalid("time", s, "expected HH:MM or HH:MM:SS"))
}

/// UTC offset in hours for `tz` at the local wall-clock time, degrading to
/// 0.0 when the specification cannot be resolved.
pub fn resolve_offset_hours(tz: &str, local: NaiveDateTime) -> f64 {
    match tz.parse::<TzSpec>() {
        Ok(spec) => spec.offset_hours_at(local),
        Err(e) => {
            warn!(zone = tz, error = %e, "zone resolution failed, using UTC");
            0.0
        }
    }
}

/// Convert a local civil date, time and zone specification into an [`Instant`].
///
/// Unparseable dates or times are errors. An unresolvable zone degrades to
/// offset 0 with a warning so that one malformed record does not abort a
/// larger computation; use [`to_instant_strict`] to reject it instead.
pub fn to_instant(date: &str, time: &str, tz: &str) -> Result<Instant, TimeError> {
    let local = parse_date(date)?.and_time(parse_time(time)?);
    Ok(Instant::from_local(local, resolve_offset_hours(tz, local)))
}

/// Like [`to_instant`] but an invalid zone specification is an error.
pub fn to_instant_strict(date: &str, time: &str, tz: &str) -> Result<Instant, TimeError> {
    let local = parse_date(date)?.and_time(parse_time(time)?);
    let spec: TzSpec = tz.parse()?;
    Ok(Instant::from_local(local, spec.offset_hours_at(local)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_date_formats() {
        let a = parse_date("15/08/1947").unwrap();
        let b = parse_date("1947-08-15").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn both_time_formats() {
        assert_eq!(parse_time("06:30").unwrap(), NaiveTime::from_hms_opt(6, 30, 0).unwrap());
        assert_eq!(parse_time("06:30:15").unwrap(), NaiveTime::from_hms_opt(6, 30, 15).unwrap());
    }

    #[test]
    fn bad_inputs_are_typed_errors() {
        assert!(matches!(
            parse_date("31/02/2020"),
            Err(TimeError::InvalidTemporalInput { field: "date", .. })
        ));
        assert!(matches!(
            parse_time("25:00"),
            Err(TimeError::InvalidTemporalInput { field: "time", .. })
        ));
        assert!(to_instant("yesterday", "10:00", "+05:30").is_err());
    }

    #[test]
    fn lenient_zone_falls_back_to_utc() {
        let lenient = to_instant("01/01/2000", "12:00", "Nowhere/Special").unwrap();
        assert!((lenient.jd_ut() - crate::J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn strict_zone_rejects() {
        assert!(to_instant_strict("01/01/2000", "12:00", "Nowhere/Special").is_err());
        assert!(to_instant_strict("01/01/2000", "12:00", "+15:00").is_err());
    }

    #[test]
    fn fixed_and_named_agree() {
        let a = to_instant("20/03/2024", "05:30", "+05:30").unwrap();
        let b = to_instant("2024-03-20", "05:30", "Asia/Kolkata").unwrap();
        assert!((a.jd_ut() - b.jd_ut()).abs() < 1e-12);
    }
}
