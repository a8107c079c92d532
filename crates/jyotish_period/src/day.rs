//! One day of a range: the pipeline and its record.
//!
//! The pipeline returns `Result<DayRecord, DayError>`; the orchestrator
//! turns every `Err` into [`DayRecord::sentinel`], so a range never aborts
//! on a bad day.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveTime};
use jyotish_base::{
    ActiveDasha, BodyPosition, ChartSettings, Graha, Panchang, active_dasha, compute_chart,
    panchang, vaar_from_weekday,
};
use jyotish_core::{Ephemeris, Instant};
use serde::Serialize;
use tracing::{debug, warn};

use crate::components::compute_components;
use crate::error::DayError;
use crate::events::{DetectedEvent, EventContext, EventRegistry};
use crate::lucky::{LuckyFactors, guidance, lucky_factors};
use crate::natal::NatalContext;
use crate::scoring::{ComponentScores, DayScore, EventImpact, Quality, ScoringEngine, event_impact};

/// Score given to a day whose pipeline failed.
pub const SENTINEL_SCORE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub weekday: &'static str,
    pub day_lord: Graha,
    pub score: f64,
    pub quality: Quality,
    pub recommendation: String,
    /// Set only on sentinel records.
    pub error: Option<String>,
    pub theme: String,
    pub influences: Vec<String>,
    pub best: String,
    pub caution: String,
    pub lucky_factors: Option<LuckyFactors>,
    pub components: Option<ComponentScores>,
    pub breakdown: Option<DayScore>,
    pub panchang: Option<Panchang>,
    pub dasha: Option<ActiveDasha>,
    pub events: Vec<DetectedEvent>,
    pub event_impact: EventImpact,
    pub positions: Vec<BodyPosition>,
}

impl DayRecord {
    /// Safe defaults for a failed day.
    pub fn sentinel(date: NaiveDate, reason: &str) -> Self {
        let vaar = vaar_from_weekday(weekday_of(date));
        Self {
            date,
            weekday: vaar.name,
            day_lord: vaar.lord,
            score: SENTINEL_SCORE,
            quality: Quality::Unknown,
            recommendation: format!("Calculation failed: {reason}"),
            error: Some(reason.to_string()),
            theme: String::new(),
            influences: Vec::new(),
            best: String::new(),
            caution: String::new(),
            lucky_factors: None,
            components: None,
            breakdown: None,
            panchang: None,
            dasha: None,
            events: Vec::new(),
            event_impact: EventImpact::default(),
            positions: Vec::new(),
        }
    }

    /// The record for a pipeline outcome; any failure becomes a sentinel.
    pub fn from_outcome(date: NaiveDate, outcome: Result<DayRecord, DayError>) -> Self {
        outcome.unwrap_or_else(|e| {
            warn!(%date, error = %e, "day pipeline failed");
            Self::sentinel(date, &e.to_string())
        })
    }

    pub fn is_sentinel(&self) -> bool {
        self.error.is_some()
    }
}

/// 0 = Sunday .. 6 = Saturday.
pub fn weekday_of(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Everything needed to evaluate any day against one birth context.
/// Shared read-only across concurrent days.
pub struct DayPipeline {
    ephemeris: Arc<dyn Ephemeris>,
    natal: Arc<NatalContext>,
    registry: EventRegistry,
    engine: ScoringEngine,
    settings: ChartSettings,
    reference_time: NaiveTime,
}

impl DayPipeline {
    pub fn new(
        ephemeris: Arc<dyn Ephemeris>,
        natal: Arc<NatalContext>,
        registry: EventRegistry,
        engine: ScoringEngine,
        settings: ChartSettings,
        reference_time: NaiveTime,
    ) -> Self {
        Self {
            ephemeris,
            natal,
            registry,
            engine,
            settings,
            reference_time,
        }
    }

    pub fn natal(&self) -> &NatalContext {
        &self.natal
    }

    /// The day's evaluation instant: the reference local time in the
    /// birth time zone. Zone failures fall back to UTC.
    pub fn instant_for(&self, date: NaiveDate) -> Instant {
        let local = date.and_time(self.reference_time);
        let offset = jyotish_time::resolve_offset_hours(&self.natal.details.timezone, local);
        Instant::from_local(local, offset)
    }

    pub fn process(&self, date: NaiveDate) -> Result<DayRecord, DayError> {
        let instant = self.instant_for(date);
        let chart = compute_chart(
            self.ephemeris.as_ref(),
            instant,
            self.natal.location,
            self.settings,
        )?;
        let sun = chart.body(Graha::Surya).ok_or(DayError::MissingBody(Graha::Surya))?;
        let moon = chart
            .body(Graha::Chandra)
            .ok_or(DayError::MissingBody(Graha::Chandra))?;

        let weekday = weekday_of(date);
        let limbs = panchang(sun.longitude(), moon.longitude(), weekday);
        let events = self.registry.occurring(&EventContext {
            natal: &self.natal,
            chart: &chart,
            panchang: &limbs,
        });

        let dasha = active_dasha(
            self.natal.birth_instant.jd_ut(),
            self.natal.moon_longitude,
            instant.jd_ut(),
        );
        if dasha.is_none() {
            warn!(%date, "no active dasha, dasha component neutral");
        }

        let scores = compute_components(&self.natal, &chart, &limbs, dasha.as_ref(), &events);
        let day_score = self.engine.score_day(&scores);
        let day_lord = limbs.vaar.lord;
        let guide = guidance(&scores, day_lord);

        debug!(%date, score = day_score.score, quality = %day_score.quality, "day scored");

        Ok(DayRecord {
            date,
            weekday: limbs.vaar.name,
            day_lord,
            score: day_score.score,
            quality: day_score.quality,
            recommendation: day_score.recommendation.to_string(),
            error: None,
            theme: format!("{} {} Energy", day_score.quality, day_lord.english_name()),
            influences: guide.influences,
            best: guide.best,
            caution: guide.caution,
            lucky_factors: Some(lucky_factors(day_lord)),
            components: Some(scores),
            breakdown: Some(day_score),
            panchang: Some(limbs),
            dasha,
            event_impact: event_impact(&events),
            events,
            positions: chart.positions().copied().collect(),
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let r = DayRecord::sentinel(date, "boom");
        assert_eq!(r.score, 50.0);
        assert_eq!(r.quality, Quality::Unknown);
        assert_eq!(r.recommendation, "Calculation failed: boom");
        assert_eq!(r.weekday, "Guruvaar");
        assert!(r.is_sentinel());
    }

    #[test]
    fn failed_outcome_becomes_sentinel() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let r = DayRecord::from_outcome(date, Err(DayError::Timeout { ms: 250 }));
        assert!(r.is_sentinel());
        assert_eq!(r.date, date);
        assert_eq!(r.score, SENTINEL_SCORE);
        assert!(r.error.as_deref().unwrap().contains("250"));

        let ok = DayRecord::sentinel(date, "kept");
        assert_eq!(DayRecord::from_outcome(date, Ok(ok.clone())), ok);
    }

    #[test]
    fn weekday_numbering() {
        // 2024-03-03 was a Sunday.
        assert_eq!(weekday_of(NaiveDate::from_ymd_opt(2024, 3, 3).unwrap()), 0);
        assert_eq!(weekday_of(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()), 6);
    }
}
