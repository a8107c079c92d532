//! Error types for civil-time parsing and instant conversion.

use thiserror::Error;

/// Errors from date/time/zone parsing or calendar conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A date, time or zone string could not be interpreted.
    #[error("invalid {field} {value:?}: {reason}")]
    InvalidTemporalInput {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
    /// The instant cannot be expressed as a civil date.
    #[error("instant outside the representable calendar range")]
    OutOfRange,
}

impl TimeError {
    pub(crate) fn invalid(field: &'static str, value: &str, reason: &'static str) -> Self {
        Self::InvalidTemporalInput {
            field,
            value: value.to_string(),
            reason,
        }
    }
}
