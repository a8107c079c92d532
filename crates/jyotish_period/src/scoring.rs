//! Weighted seven-component day score.
//!
//! `score = clamp((Σ value_i × weight_i + 100) / 2, 0, 100)`. The ghataka
//! penalty enters the sum negated; every other component enters as given.

use jyotish_config::{ScoringSection, WEIGHT_SUM_TOLERANCE};
use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::events::{DetectedEvent, EventCategory};

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Dasha,
    Transit,
    Tarabala,
    Chandrabala,
    Panchang,
    Ghataka,
    Muhurta,
}

pub const ALL_COMPONENTS: [ComponentKind; 7] = [
    ComponentKind::Dasha,
    ComponentKind::Transit,
    ComponentKind::Tarabala,
    ComponentKind::Chandrabala,
    ComponentKind::Panchang,
    ComponentKind::Ghataka,
    ComponentKind::Muhurta,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Dasha,
    Transit,
    Muhurta,
    Panchang,
    Event,
}

impl ComponentKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dasha => "Dasha Lord",
            Self::Transit => "Transits",
            Self::Tarabala => "Tarabala",
            Self::Chandrabala => "Chandrabala",
            Self::Panchang => "Panchang",
            Self::Ghataka => "Ghataka",
            Self::Muhurta => "Muhurta Events",
        }
    }

    pub const fn category(self) -> ScoreCategory {
        match self {
            Self::Dasha => ScoreCategory::Dasha,
            Self::Transit => ScoreCategory::Transit,
            Self::Tarabala | Self::Chandrabala | Self::Ghataka => ScoreCategory::Muhurta,
            Self::Panchang => ScoreCategory::Panchang,
            Self::Muhurta => ScoreCategory::Event,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Dasha => "Current major/minor period ruler strength",
            Self::Transit => "Current planetary positions from the natal Moon",
            Self::Tarabala => "Nakshatra compatibility from the birth Moon",
            Self::Chandrabala => "Current Moon strength and position",
            Self::Panchang => "Tithi, nakshatra, yoga and karana quality",
            Self::Ghataka => "Penalty for ghataka obstructions",
            Self::Muhurta => "Bonus for special auspicious events",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Raw component values for one day.
///
/// The first five lie in [-100, 100]; `ghataka_penalty` and `muhurta_bonus`
/// lie in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentScores {
    pub dasha: f64,
    pub transit: f64,
    pub tarabala: f64,
    pub chandrabala: f64,
    pub panchang: f64,
    pub ghataka_penalty: f64,
    pub muhurta_bonus: f64,
}

impl ComponentScores {
    /// Signed contribution of each component, in [`ALL_COMPONENTS`] order.
    pub fn signed_values(&self) -> [f64; 7] {
        [
            self.dasha,
            self.transit,
            self.tarabala,
            self.chandrabala,
            self.panchang,
            -self.ghataka_penalty,
            self.muhurta_bonus,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub kind: ComponentKind,
    pub name: &'static str,
    pub value: f64,
    pub weight: f64,
    pub weighted_value: f64,
    pub category: ScoreCategory,
}

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Validated weight table; always sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringWeights([f64; 7]);

impl ScoringWeights {
    pub fn new(weights: [f64; 7]) -> Result<Self, ScoringError> {
        for (kind, &value) in ALL_COMPONENTS.iter().zip(&weights) {
            if !(0.0..=1.0).contains(&value) {
                return Err(ScoringError::WeightOutOfRange {
                    name: kind.name(),
                    value,
                });
            }
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoringError::WeightSum { sum });
        }
        Ok(Self(weights))
    }

    pub fn from_config(section: &ScoringSection) -> Result<Self, ScoringError> {
        Self::new(section.as_array())
    }

    pub fn get(&self, kind: ComponentKind) -> f64 {
        self.0[kind.index()]
    }

    pub fn as_array(&self) -> [f64; 7] {
        self.0
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self([0.30, 0.25, 0.15, 0.10, 0.10, 0.05, 0.05])
    }
}

// ---------------------------------------------------------------------------
// Quality
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quality {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
    Poor,
    /// Sentinel quality of a failed day.
    Unknown,
}

impl Quality {
    /// Bucket by inclusive lower bounds 80 / 65 / 50 / 35.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 65.0 {
            Self::Good
        } else if score >= 50.0 {
            Self::Average
        } else if score >= 35.0 {
            Self::BelowAverage
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
            Self::Poor => "Poor",
            Self::Unknown => "Unknown",
        }
    }

    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Excellent => "Highly favorable for all activities",
            Self::Good => "Favorable for most activities",
            Self::Average => "Moderate - proceed with caution",
            Self::BelowAverage => "Not ideal - avoid important activities",
            Self::Poor => "Unfavorable - postpone important activities",
            Self::Unknown => "Calculation failed",
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayScore {
    /// Normalized score in [0, 100].
    pub score: f64,
    pub quality: Quality,
    pub recommendation: &'static str,
    pub weighted_sum: f64,
    pub components: Vec<ScoreComponent>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn from_config(section: &ScoringSection) -> Result<Self, ScoringError> {
        Ok(Self::new(ScoringWeights::from_config(section)?))
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score_day(&self, scores: &ComponentScores) -> DayScore {
        let components: Vec<ScoreComponent> = ALL_COMPONENTS
            .iter()
            .zip(scores.signed_values())
            .map(|(&kind, value)| {
                let weight = self.weights.get(kind);
                ScoreComponent {
                    kind,
                    name: kind.name(),
                    value,
                    weight,
                    weighted_value: value * weight,
                    category: kind.category(),
                }
            })
            .collect();
        let weighted_sum: f64 = components.iter().map(|c| c.weighted_value).sum();
        let score = ((weighted_sum + 100.0) / 2.0).clamp(0.0, 100.0);
        let quality = Quality::from_score(score);
        DayScore {
            score,
            quality,
            recommendation: quality.recommendation(),
            weighted_sum,
            components,
        }
    }
}

// ---------------------------------------------------------------------------
// Event impact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EventImpact {
    pub auspicious_count: usize,
    pub inauspicious_count: usize,
    pub auspicious_events: Vec<String>,
    pub inauspicious_events: Vec<String>,
    /// Σ auspicious strength − Σ inauspicious strength, occurring events only.
    pub net_strength: f64,
}

pub fn event_impact(events: &[DetectedEvent]) -> EventImpact {
    let mut impact = EventImpact::default();
    for e in events.iter().filter(|e| e.occurring) {
        match e.category {
            EventCategory::Auspicious => {
                impact.auspicious_count += 1;
                impact.auspicious_events.push(e.name.clone());
                impact.net_strength += e.strength;
            }
            EventCategory::Inauspicious => {
                impact.inauspicious_count += 1;
                impact.inauspicious_events.push(e.name.clone());
                impact.net_strength -= e.strength;
            }
        }
    }
    impact
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(v: f64) -> ComponentScores {
        ComponentScores {
            dasha: v,
            transit: v,
            tarabala: v,
            chandrabala: v,
            panchang: v,
            ghataka_penalty: 0.0,
            muhurta_bonus: 0.0,
        }
    }

    #[test]
    fn default_weights_validate() {
        let w = ScoringWeights::default();
        assert_eq!(ScoringWeights::new(w.as_array()), Ok(w));
    }

    #[test]
    fn bad_weights_rejected() {
        assert!(matches!(
            ScoringWeights::new([0.3, 0.3, 0.15, 0.1, 0.1, 0.05, 0.05]),
            Err(ScoringError::WeightSum { .. })
        ));
        assert!(matches!(
            ScoringWeights::new([1.2, -0.2, 0.0, 0.0, 0.0, 0.0, 0.0]),
            Err(ScoringError::WeightOutOfRange { name: "Dasha Lord", .. })
        ));
    }

    #[test]
    fn neutral_day_is_fifty() {
        let s = ScoringEngine::default().score_day(&ComponentScores::default());
        assert_eq!(s.score, 50.0);
        assert_eq!(s.quality, Quality::Average);
    }

    #[test]
    fn extremes_stay_in_range() {
        let engine = ScoringEngine::default();
        let best = ComponentScores {
            muhurta_bonus: 100.0,
            ..uniform(100.0)
        };
        let worst = ComponentScores {
            ghataka_penalty: 100.0,
            ..uniform(-100.0)
        };
        let hi = engine.score_day(&best);
        let lo = engine.score_day(&worst);
        assert!((hi.score - 97.5).abs() < 1e-9);
        assert!((lo.score - 2.5).abs() < 1e-9);
        assert_eq!(hi.quality, Quality::Excellent);
        assert_eq!(lo.quality, Quality::Poor);
    }

    #[test]
    fn ghataka_is_subtracted() {
        let s = ScoringEngine::default().score_day(&ComponentScores {
            ghataka_penalty: 100.0,
            ..ComponentScores::default()
        });
        assert!((s.weighted_sum + 5.0).abs() < 1e-12);
        assert!((s.score - 47.5).abs() < 1e-12);
        assert_eq!(s.components[ComponentKind::Ghataka.index()].value, -100.0);
    }

    #[test]
    fn quality_boundaries() {
        assert_eq!(Quality::from_score(80.0), Quality::Excellent);
        assert_eq!(Quality::from_score(79.99), Quality::Good);
        assert_eq!(Quality::from_score(65.0), Quality::Good);
        assert_eq!(Quality::from_score(64.999), Quality::Average);
        assert_eq!(Quality::from_score(50.0), Quality::Average);
        assert_eq!(Quality::from_score(35.0), Quality::BelowAverage);
        assert_eq!(Quality::from_score(34.99), Quality::Poor);
    }

    #[test]
    fn impact_counts_only_occurring() {
        let ev = |name: &str, occurring, category, strength| DetectedEvent {
            name: name.to_string(),
            occurring,
            strength,
            category,
            description: String::new(),
        };
        let events = [
            ev("a", true, EventCategory::Auspicious, 40.0),
            ev("b", true, EventCategory::Inauspicious, 15.0),
            ev("c", false, EventCategory::Auspicious, 99.0),
        ];
        let impact = event_impact(&events);
        assert_eq!(impact.auspicious_count, 1);
        assert_eq!(impact.inauspicious_count, 1);
        assert_eq!(impact.net_strength, 25.0);
        assert_eq!(impact.auspicious_events, vec!["a".to_string()]);
    }
}
