//! Daily scoring and period orchestration against a fixed birth context.
//!
//! A [`DayPipeline`] turns one calendar day into a [`DayRecord`]: transit
//! chart, panchang, events, seven component scores and the weighted final
//! score. A [`PeriodOrchestrator`] drives the pipeline over a date range,
//! isolating every day, and aggregates a [`PeriodSummary`] and a
//! [`Narrative`].

pub mod components;
pub mod day;
pub mod error;
pub mod events;
pub mod lucky;
pub mod narrative;
pub mod natal;
pub mod orchestrator;
pub mod scoring;
pub mod summary;

pub use components::{
    compute_components, dasha_score, ghataka_penalty, muhurta_bonus, panchang_score,
    transit_score,
};
pub use day::{DayPipeline, DayRecord, SENTINEL_SCORE};
pub use error::{DayError, EventError, NarrativeError, PeriodError, PeriodResult, ScoringError};
pub use events::{DetectedEvent, EventCategory, EventContext, EventDetector, EventRegistry};
pub use lucky::{Guidance, LuckyFactors, guidance, lucky_factors};
pub use narrative::{
    Narrative, NarrativeContext, NarrativeGenerator, NarrativeSource, fallback_narrative,
};
pub use natal::{BirthDetails, NatalContext};
pub use orchestrator::{
    ExecutionMode, OrchestratorOptions, PeriodAnalysis, PeriodOrchestrator, calendar_days,
    month_bounds,
};
pub use scoring::{
    ALL_COMPONENTS, ComponentKind, ComponentScores, DayScore, EventImpact, Quality,
    ScoringEngine, ScoringWeights, event_impact,
};
pub use summary::{PeriodSummary, QualityCounts, RankedDay, Trend, classify_trend, summarize};
