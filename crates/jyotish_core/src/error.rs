//! Error type for the ephemeris boundary.

use thiserror::Error;

use crate::Body;

/// Failures reported by an [`crate::Ephemeris`] adapter or boundary validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The adapter could not produce a state for this body.
    #[error("ephemeris unavailable for {body:?}: {reason}")]
    BodyUnavailable { body: Body, reason: String },
    /// The instant lies outside the adapter's coverage.
    #[error("instant JD {jd_ut} outside ephemeris coverage")]
    OutOfRange { jd_ut: f64 },
    /// House cusps could not be computed (e.g. polar latitude for Placidus).
    #[error("house cusps unavailable: {0}")]
    HousesUnavailable(String),
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    #[error("ephemeris adapter error: {0}")]
    Adapter(String),
}
