//! Hand-off point for the external narrative generator.
//!
//! The generator is unreliable by contract. [`fallback_narrative`] gives a
//! deterministic text keyed by the average score whenever it is absent,
//! fails, panics or times out.

use async_trait::async_trait;
use serde::Serialize;

use crate::day::DayRecord;
use crate::error::NarrativeError;
use crate::events::DetectedEvent;
use crate::summary::{PeriodSummary, QualityCounts, Trend};

/// Score statistics handed to the generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativeContext {
    pub average_score: f64,
    pub trend: Trend,
    pub counts: QualityCounts,
}

impl NarrativeContext {
    /// A range with no valid day is treated as neutral (50).
    pub fn from_summary(summary: &PeriodSummary) -> Self {
        Self {
            average_score: summary.average_score.unwrap_or(50.0),
            trend: summary.trend,
            counts: summary.counts,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeSource {
    Generator,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Narrative {
    pub overall: String,
    pub career: String,
    pub health: String,
    pub relationships: String,
    pub finances: String,
    pub remedies: Vec<String>,
    pub generated_by: NarrativeSource,
    pub confidence: f64,
}

/// External prose generator.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(
        &self,
        context: &NarrativeContext,
        events: &[DetectedEvent],
        days: &[DayRecord],
    ) -> Result<Narrative, NarrativeError>;
}

pub const FALLBACK_CONFIDENCE: f64 = 0.6;

pub fn fallback_narrative(average_score: f64) -> Narrative {
    let [overall, career, health, relationships, finances] = if average_score >= 70.0 {
        [
            "Favorable period with good planetary support",
            "Good for career progress and new initiatives",
            "Health prospects favorable",
            "Harmonious relationships indicated",
            "Financial stability and growth possible",
        ]
    } else if average_score >= 55.0 {
        [
            "Mixed period with moderate influences",
            "Steady progress possible with effort",
            "Health stable, maintain routines",
            "Patience and understanding needed",
            "Conservative financial approach advised",
        ]
    } else {
        [
            "Challenging period requiring caution",
            "Focus on consolidation rather than expansion",
            "Extra care needed for health",
            "Avoid conflicts, be diplomatic",
            "Exercise financial caution",
        ]
    };
    Narrative {
        overall: overall.to_string(),
        career: career.to_string(),
        health: health.to_string(),
        relationships: relationships.to_string(),
        finances: finances.to_string(),
        remedies: vec![
            "Daily meditation recommended for mental clarity".to_string(),
            "Charitable donations on auspicious days".to_string(),
            "Follow birth chart specific remedies".to_string(),
        ],
        generated_by: NarrativeSource::Fallback,
        confidence: FALLBACK_CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_buckets() {
        assert!(fallback_narrative(70.0).overall.starts_with("Favorable"));
        assert!(fallback_narrative(69.9).overall.starts_with("Mixed"));
        assert!(fallback_narrative(55.0).overall.starts_with("Mixed"));
        assert!(fallback_narrative(54.9).overall.starts_with("Challenging"));
        let n = fallback_narrative(10.0);
        assert_eq!(n.remedies.len(), 3);
        assert_eq!(n.generated_by, NarrativeSource::Fallback);
        assert_eq!(n.confidence, 0.6);
    }
}
