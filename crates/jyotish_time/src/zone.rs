//! Time-zone specifications: fixed UTC offsets and named IANA zones.
//!
//! Named zones resolve their offset at the given local wall-clock time, so
//! daylight-saving transitions are honored. Policy at transitions:
//! - ambiguous local times (clocks set back) take the later instant, i.e.
//!   the standard-time offset;
//! - non-existent local times (clocks set forward) take the offset in
//!   effect before the gap.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, LocalResult, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

use crate::error::TimeError;

/// Largest accepted fixed offset magnitude, in minutes (±14:00).
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// A parsed time-zone specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TzSpec {
    /// Fixed offset east of UTC, in minutes.
    Fixed { minutes: i32 },
    /// IANA zone such as `Asia/Kolkata`.
    Named(Tz),
}

impl TzSpec {
    /// UTC offset in hours in effect at the given local wall-clock time.
    pub fn offset_hours_at(&self, local: NaiveDateTime) -> f64 {
        match self {
            Self::Fixed { minutes } => f64::from(*minutes) / 60.0,
            Self::Named(tz) => f64::from(named_offset_seconds(tz, local)) / 3600.0,
        }
    }
}

impl FromStr for TzSpec {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.as_bytes().first() {
            None => Err(TimeError::invalid("zone", s, "empty zone specification")),
            Some(b'+' | b'-' | b'0'..=b'9') => parse_fixed_offset(s),
            Some(_) => s
                .parse::<Tz>()
                .map(Self::Named)
                .map_err(|_| TimeError::invalid("zone", s, "not a known IANA zone name")),
        }
    }
}

impl fmt::Display for TzSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { minutes } => {
                let sign = if *minutes < 0 { '-' } else { '+' };
                let abs = minutes.abs();
                write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
            }
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}

/// Strictly parse a zone specification (`+05:30`, `-08`, `+0530`, `Europe/Berlin`).
pub fn parse_tz_spec(s: &str) -> Result<TzSpec, TimeError> {
    s.parse()
}

fn parse_fixed_offset(s: &str) -> Result<TzSpec, TimeError> {
    let (sign, body) = match s.as_bytes()[0] {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => (1, s),
    };
    let (hh, mm) = match body.split_once(':') {
        Some(parts) => parts,
        None if body.len() == 4 => body.split_at(2),
        None => (body, "00"),
    };
    let all_digits = |p: &str| !p.is_empty() && p.len() <= 2 && p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(hh) || !all_digits(mm) {
        return Err(TimeError::invalid("zone", s, "expected ±HH[:MM]"));
    }
    let hours: i32 = hh
        .parse()
        .map_err(|_| TimeError::invalid("zone", s, "expected ±HH[:MM]"))?;
    let minutes: i32 = mm
        .parse()
        .map_err(|_| TimeError::invalid("zone", s, "expected ±HH[:MM]"))?;
    if minutes >= 60 {
        return Err(TimeError::invalid("zone", s, "offset minutes must be below 60"));
    }
    let total = hours * 60 + minutes;
    if total > MAX_OFFSET_MINUTES {
        return Err(TimeError::invalid("zone", s, "offset magnitude exceeds 14 hours"));
    }
    Ok(TzSpec::Fixed {
        minutes: sign * total,
    })
}

fn named_offset_seconds(tz: &Tz, local: NaiveDateTime) -> i32 {
    match tz.offset_from_local_datetime(&local) {
        LocalResult::Single(off) => off.fix().local_minus_utc(),
        LocalResult::Ambiguous(_, later) => later.fix().local_minus_utc(),
        LocalResult::None => tz
            .offset_from_local_datetime(&(local - Duration::hours(3)))
            .earliest()
            .map(|off| off.fix().local_minus_utc())
            .unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn fixed_offsets() {
        assert_eq!(parse_tz_spec("+05:30").unwrap(), TzSpec::Fixed { minutes: 330 });
        assert_eq!(parse_tz_spec("-08").unwrap(), TzSpec::Fixed { minutes: -480 });
        assert_eq!(parse_tz_spec("+0545").unwrap(), TzSpec::Fixed { minutes: 345 });
        assert_eq!(parse_tz_spec("14:00").unwrap(), TzSpec::Fixed { minutes: 840 });
    }

    #[test]
    fn fixed_offset_limits() {
        assert!(parse_tz_spec("+14:01").is_err());
        assert!(parse_tz_spec("-15").is_err());
        assert!(parse_tz_spec("+05:60").is_err());
        assert!(parse_tz_spec("+5:3x").is_err());
        assert!(parse_tz_spec("").is_err());
    }

    #[test]
    fn named_zone_static() {
        let tz = parse_tz_spec("Asia/Kolkata").unwrap();
        assert!((tz.offset_hours_at(local(1990, 5, 1, 10, 0)) - 5.5).abs() < 1e-12);
    }

    #[test]
    fn named_zone_dst_aware() {
        let tz = parse_tz_spec("America/New_York").unwrap();
        assert!((tz.offset_hours_at(local(2024, 1, 15, 12, 0)) + 5.0).abs() < 1e-12);
        assert!((tz.offset_hours_at(local(2024, 7, 15, 12, 0)) + 4.0).abs() < 1e-12);
    }

    #[test]
    fn ambiguous_takes_standard_offset() {
        // 2024-11-03 01:30 happens twice in New York.
        let tz = parse_tz_spec("America/New_York").unwrap();
        assert!((tz.offset_hours_at(local(2024, 11, 3, 1, 30)) + 5.0).abs() < 1e-12);
    }

    #[test]
    fn gap_takes_offset_before_transition() {
        // 2024-03-10 02:30 does not exist in New York.
        let tz = parse_tz_spec("America/New_York").unwrap();
        assert!((tz.offset_hours_at(local(2024, 3, 10, 2, 30)) + 5.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_zone_rejected() {
        assert!(matches!(
            parse_tz_spec("Mars/Olympus_Mons"),
            Err(TimeError::InvalidTemporalInput { field: "zone", .. })
        ));
    }

    #[test]
    fn display() {
        assert_eq!(TzSpec::Fixed { minutes: -210 }.to_string(), "-03:30");
        assert_eq!(parse_tz_spec("Europe/Berlin").unwrap().to_string(), "Europe/Berlin");
    }
}
