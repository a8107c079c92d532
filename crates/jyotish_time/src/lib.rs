//! Civil time → absolute instant normalization.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - An [`Instant`] type: a UT Julian day count with civil conversions
//! - Fixed-offset and DST-aware named-zone resolution ([`TzSpec`])
//! - Date/time parsing and the [`to_instant`] normalizer

pub mod civil;
pub mod error;
pub mod instant;
pub mod julian;
pub mod zone;

pub use civil::{parse_date, parse_time, resolve_offset_hours, to_instant, to_instant_strict};
pub use error::TimeError;
pub use instant::Instant;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar, weekday_index,
};
pub use zone::{MAX_OFFSET_MINUTES, TzSpec, parse_tz_spec};

/// Julian centuries of 36525 days since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}
