//! Range analysis: per-day fan-out, calendar-ordered reassembly, summary
//! and narrative.
//!
//! Days are independent functions of `(date, birth context)`. Ranges longer
//! than the parallel threshold fan out over a [`JoinSet`], bounded by a
//! [`Semaphore`], with each day's CPU work on the blocking pool under its own
//! deadline. Results land in an indexed slot vector so completion order never
//! leaks into the output. Every failure mode of a day (error, panic, timeout,
//! lost task) becomes a sentinel [`DayRecord`].
//!
//! Dropping the future returned by [`PeriodOrchestrator::analyze_range`]
//! drops the `JoinSet`, which aborts every day not yet started. There is no
//! shared mutable state to unwind.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use futures::FutureExt;
use jyotish_base::{ChartSettings, Nakshatra, Rashi};
use jyotish_config::{JyotishConfig, PeriodSection};
use jyotish_core::Ephemeris;
use serde::Serialize;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};

use crate::day::{DayPipeline, DayRecord};
use crate::error::{DayError, PeriodError, PeriodResult};
use crate::events::{DetectedEvent, EventRegistry};
use crate::narrative::{Narrative, NarrativeContext, NarrativeGenerator, fallback_narrative};
use crate::natal::{BirthDetails, NatalContext};
use crate::scoring::ScoringEngine;
use crate::summary::{PeriodSummary, summarize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    Sequential,
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrchestratorOptions {
    /// Ranges with more days than this run in parallel.
    pub parallel_threshold_days: usize,
    pub max_concurrent_days: usize,
    pub day_timeout: Duration,
    pub narrative_timeout: Duration,
    pub top_n: usize,
}

impl OrchestratorOptions {
    pub fn from_config(section: &PeriodSection) -> Self {
        Self {
            parallel_threshold_days: section.parallel_threshold_days,
            max_concurrent_days: section.max_concurrent_days.max(1),
            day_timeout: Duration::from_millis(section.day_timeout_ms),
            narrative_timeout: Duration::from_millis(section.narrative_timeout_ms),
            top_n: section.top_n,
        }
    }

    pub fn mode_for(&self, days: usize) -> ExecutionMode {
        if days > self.parallel_threshold_days {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }
}

impl Default for OrchestratorOptions {
    fn default() -> Self {
        Self::from_config(&PeriodSection::default())
    }
}

/// Result of one range analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodAnalysis {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub mode: ExecutionMode,
    pub birth_nakshatra: Nakshatra,
    pub birth_rashi: Rashi,
    /// One record per calendar day, ascending.
    pub days: Vec<DayRecord>,
    pub summary: PeriodSummary,
    pub narrative: Narrative,
}

pub struct PeriodOrchestrator {
    pipeline: Arc<DayPipeline>,
    narrator: Option<Arc<dyn NarrativeGenerator>>,
    options: OrchestratorOptions,
}

impl PeriodOrchestrator {
    pub fn new(pipeline: DayPipeline, options: OrchestratorOptions) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            narrator: None,
            options,
        }
    }

    /// Build the birth context, builtin event registry and scoring engine
    /// from a validated configuration.
    ///
    /// Fails only for configuration defects and invalid birth details.
    pub fn from_config(
        ephemeris: Arc<dyn Ephemeris>,
        birth: &BirthDetails,
        config: &JyotishConfig,
    ) -> PeriodResult<Self> {
        let engine = ScoringEngine::from_config(&config.scoring)?;
        let reference_time = jyotish_time::parse_time(&config.period.reference_time)?;
        let settings = ChartSettings {
            ayanamsha: config.chart.ayanamsha,
            node_mode: config.chart.node_mode,
            house_system: config.chart.house_system,
        };
        let natal = NatalContext::compute(ephemeris.as_ref(), birth, settings)?;
        let pipeline = DayPipeline::new(
            ephemeris,
            Arc::new(natal),
            EventRegistry::with_builtin(),
            engine,
            settings,
            reference_time,
        );
        Ok(Self::new(
            pipeline,
            OrchestratorOptions::from_config(&config.period),
        ))
    }

    pub fn with_narrator(mut self, narrator: Arc<dyn NarrativeGenerator>) -> Self {
        self.narrator = Some(narrator);
        self
    }

    pub fn options(&self) -> &OrchestratorOptions {
        &self.options
    }

    pub fn pipeline(&self) -> &DayPipeline {
        &self.pipeline
    }

    /// Analyze every calendar day in `[start, end]`.
    #[instrument(skip(self), fields(days = tracing::field::Empty))]
    pub async fn analyze_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PeriodResult<PeriodAnalysis> {
        let dates = calendar_days(start, end)?;
        let mode = self.options.mode_for(dates.len());
        tracing::Span::current().record("days", dates.len());
        debug!(days = dates.len(), mode = ?mode, "analyzing range");

        let days = match mode {
            ExecutionMode::Parallel => self.run_parallel(&dates).await,
            ExecutionMode::Sequential => self.run_sequential(&dates).await,
        };

        let summary = summarize(&days, self.options.top_n);
        let narrative = self.narrate(&summary, &days).await;
        info!(
            valid = summary.valid_days,
            failed = summary.failed_days,
            trend = summary.trend.label(),
            "range analyzed"
        );
        Ok(self.assemble(start, end, mode, days, summary, narrative))
    }

    /// Analyze one calendar month.
    pub async fn analyze_month(&self, year: i32, month: u32) -> PeriodResult<PeriodAnalysis> {
        let (start, end) = month_bounds(year, month)?;
        self.analyze_range(start, end).await
    }

    /// Strictly sequential analysis for callers without an async runtime.
    ///
    /// Panics inside a day are caught and become sentinels. No per-day
    /// deadline applies, and the narrative is always the fallback.
    pub fn analyze_range_blocking(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PeriodResult<PeriodAnalysis> {
        let dates = calendar_days(start, end)?;
        debug!(days = dates.len(), "analyzing range without runtime");
        let days: Vec<DayRecord> = dates
            .iter()
            .map(|&date| {
                let outcome = catch_unwind(AssertUnwindSafe(|| self.pipeline.process(date)))
                    .unwrap_or_else(|payload| Err(DayError::Panicked(panic_message(payload))));
                DayRecord::from_outcome(date, outcome)
            })
            .collect();
        let summary = summarize(&days, self.options.top_n);
        let narrative = fallback_narrative(summary.average_score.unwrap_or(50.0));
        Ok(self.assemble(
            start,
            end,
            ExecutionMode::Sequential,
            days,
            summary,
            narrative,
        ))
    }

    async fn run_sequential(&self, dates: &[NaiveDate]) -> Vec<DayRecord> {
        let mut records = Vec::with_capacity(dates.len());
        for &date in dates {
            let pipeline = Arc::clone(&self.pipeline);
            records.push(run_day(pipeline, date, self.options.day_timeout, None).await);
        }
        records
    }

    async fn run_parallel(&self, dates: &[NaiveDate]) -> Vec<DayRecord> {
        let semaphore = Arc::new(Semaphore::new(self.options.max_concurrent_days));
        let mut join_set = JoinSet::new();
        for (idx, &date) in dates.iter().enumerate() {
            let pipeline = Arc::clone(&self.pipeline);
            let semaphore = Arc::clone(&semaphore);
            let limit = self.options.day_timeout;
            join_set.spawn(async move {
                let record = match semaphore.acquire_owned().await {
                    Ok(permit) => run_day(pipeline, date, limit, Some(permit)).await,
                    Err(e) => DayRecord::from_outcome(date, Err(DayError::Join(e.to_string()))),
                };
                (idx, record)
            });
        }

        let mut ordered: Vec<Option<DayRecord>> = vec![None; dates.len()];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((idx, record)) => ordered[idx] = Some(record),
                Err(e) => warn!(error = %e, "day task lost"),
            }
        }

        dates
            .iter()
            .zip(ordered)
            .map(|(&date, slot)| {
                slot.unwrap_or_else(|| {
                    DayRecord::from_outcome(date, Err(DayError::Join("day task lost".into())))
                })
            })
            .collect()
    }

    /// Narrative from the collaborator, or the fallback on absence, error,
    /// panic or timeout.
    async fn narrate(&self, summary: &PeriodSummary, days: &[DayRecord]) -> Narrative {
        let context = NarrativeContext::from_summary(summary);
        let Some(narrator) = &self.narrator else {
            return fallback_narrative(context.average_score);
        };
        let events: Vec<DetectedEvent> = days.iter().flat_map(|d| d.events.iter().cloned()).collect();
        let call = AssertUnwindSafe(narrator.generate(&context, &events, days)).catch_unwind();
        let failure = match tokio::time::timeout(self.options.narrative_timeout, call).await {
            Ok(Ok(Ok(narrative))) => return narrative,
            Ok(Ok(Err(e))) => e.to_string(),
            Ok(Err(payload)) => format!("narrative generator panicked: {}", panic_message(payload)),
            Err(_) => format!(
                "narrative generation timed out after {} ms",
                self.options.narrative_timeout.as_millis()
            ),
        };
        warn!(reason = %failure, "using fallback narrative");
        fallback_narrative(context.average_score)
    }

    fn assemble(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        mode: ExecutionMode,
        days: Vec<DayRecord>,
        summary: PeriodSummary,
        narrative: Narrative,
    ) -> PeriodAnalysis {
        let natal = self.pipeline.natal();
        PeriodAnalysis {
            start,
            end,
            mode,
            birth_nakshatra: natal.moon_nakshatra,
            birth_rashi: natal.moon_rashi,
            days,
            summary,
            narrative,
        }
    }
}

/// One day on the blocking pool under a deadline. Never fails.
///
/// A timed-out day's blocking thread runs to completion in the background
/// and its result is discarded. The permit moves into that thread, so a
/// stalled day still counts against `max_concurrent_days` until it returns.
async fn run_day(
    pipeline: Arc<DayPipeline>,
    date: NaiveDate,
    limit: Duration,
    permit: Option<OwnedSemaphorePermit>,
) -> DayRecord {
    let handle = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        pipeline.process(date)
    });
    let outcome = match tokio::time::timeout(limit, handle).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) if e.is_panic() => Err(DayError::Panicked(panic_message(e.into_panic()))),
        Ok(Err(e)) => Err(DayError::Join(e.to_string())),
        Err(_) => Err(DayError::Timeout {
            ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
        }),
    };
    DayRecord::from_outcome(date, outcome)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Inclusive calendar days of `[start, end]`.
pub fn calendar_days(start: NaiveDate, end: NaiveDate) -> PeriodResult<Vec<NaiveDate>> {
    if start > end {
        return Err(PeriodError::InvalidRange { start, end });
    }
    Ok(start.iter_days().take_while(|d| *d <= end).collect())
}

/// First and last day of a month.
pub fn month_bounds(year: i32, month: u32) -> PeriodResult<(NaiveDate, NaiveDate)> {
    let invalid = || PeriodError::InvalidMonth { year, month };
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(invalid)?;
    Ok((start, end))
}
