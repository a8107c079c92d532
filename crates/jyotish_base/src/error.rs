//! Error types for chart computation.

use jyotish_core::EphemerisError;
use thiserror::Error;

/// Chart-level failures. Per-body failures are not errors: they are
/// reported inside the chart as [`crate::BodyReading::Unavailable`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error("ayanamsha unavailable: {0}")]
    Ayanamsha(#[source] EphemerisError),
    #[error("house cusps unavailable: {0}")]
    Houses(#[source] EphemerisError),
    #[error("non-finite value from ephemeris for {0}")]
    NonFinite(&'static str),
}
