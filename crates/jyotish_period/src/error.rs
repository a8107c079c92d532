use chrono::NaiveDate;
use jyotish_base::{ChartError, Graha};
use jyotish_time::TimeError;
use thiserror::Error;

/// Weight-table defects. Fatal at construction.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ScoringError {
    #[error("scoring weights must sum to 1.0, got {sum}")]
    WeightSum { sum: f64 },
    #[error("weight {name} = {value} is outside [0, 1]")]
    WeightOutOfRange { name: &'static str, value: f64 },
}

/// Why one day's pipeline produced no record.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum DayError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("{} unavailable for the day", .0.english_name())]
    MissingBody(Graha),
    #[error("timed out after {ms} ms")]
    Timeout { ms: u64 },
    #[error("day pipeline panicked: {0}")]
    Panicked(String),
    #[error("day task failed: {0}")]
    Join(String),
}

/// A detector that could not evaluate its condition.
#[derive(Debug, Clone, Error)]
#[error("detector {name} failed: {reason}")]
pub struct EventError {
    pub name: String,
    pub reason: String,
}

/// Failures of the narrative collaborator. Never surfaced to callers of the
/// orchestrator; they select the fallback narrative instead.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum NarrativeError {
    #[error("narrative service unavailable: {0}")]
    Unavailable(String),
    #[error("narrative generation timed out")]
    Timeout,
    #[error("narrative generation failed: {0}")]
    Failed(String),
}

/// Range-level failures: configuration defects and invalid birth context.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PeriodError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error("invalid birth context: {0}")]
    BirthContext(String),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error("natal chart: {0}")]
    Chart(#[from] ChartError),
    #[error("invalid range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("invalid month {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
}

pub type PeriodResult<T> = Result<T, PeriodError>;
