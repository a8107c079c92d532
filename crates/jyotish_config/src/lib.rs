//! TOML configuration for chart settings, period analysis, scoring weights
//! and logging.
//!
//! Every field carries a serde default, so an empty file (or no file at
//! all) yields [`JyotishConfig::default`].

pub mod error;

use std::fs;
use std::path::Path;

use jyotish_core::{AyanamshaSystem, HouseSystem, NodeMode};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;

/// Tolerance on the scoring-weight sum.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JyotishConfig {
    #[serde(default)]
    pub chart: ChartSection,
    #[serde(default)]
    pub period: PeriodSection,
    #[serde(default)]
    pub scoring: ScoringSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartSection {
    #[serde(default)]
    pub ayanamsha: AyanamshaSystem,
    #[serde(default)]
    pub node_mode: NodeMode,
    #[serde(default)]
    pub house_system: HouseSystem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSection {
    /// Ranges longer than this many days run in parallel.
    #[serde(default = "default_parallel_threshold_days")]
    pub parallel_threshold_days: usize,
    #[serde(default = "default_max_concurrent_days")]
    pub max_concurrent_days: usize,
    #[serde(default = "default_day_timeout_ms")]
    pub day_timeout_ms: u64,
    #[serde(default = "default_narrative_timeout_ms")]
    pub narrative_timeout_ms: u64,
    /// Local time of day at which each day is evaluated, `HH:MM[:SS]`.
    #[serde(default = "default_reference_time")]
    pub reference_time: String,
    /// Size of the best/worst rankings.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_parallel_threshold_days() -> usize {
    5
}

fn default_max_concurrent_days() -> usize {
    8
}

fn default_day_timeout_ms() -> u64 {
    10_000
}

fn default_narrative_timeout_ms() -> u64 {
    30_000
}

fn default_reference_time() -> String {
    "06:00".to_string()
}

fn default_top_n() -> usize {
    5
}

impl Default for PeriodSection {
    fn default() -> Self {
        Self {
            parallel_threshold_days: default_parallel_threshold_days(),
            max_concurrent_days: default_max_concurrent_days(),
            day_timeout_ms: default_day_timeout_ms(),
            narrative_timeout_ms: default_narrative_timeout_ms(),
            reference_time: default_reference_time(),
            top_n: default_top_n(),
        }
    }
}

/// The seven component weights. Ghataka is a weight on a penalty; it is
/// stored positive and subtracted by the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringSection {
    #[serde(default = "default_dasha")]
    pub dasha: f64,
    #[serde(default = "default_transit")]
    pub transit: f64,
    #[serde(default = "default_tarabala")]
    pub tarabala: f64,
    #[serde(default = "default_chandrabala")]
    pub chandrabala: f64,
    #[serde(default = "default_panchang")]
    pub panchang: f64,
    #[serde(default = "default_ghataka")]
    pub ghataka: f64,
    #[serde(default = "default_muhurta")]
    pub muhurta: f64,
}

fn default_dasha() -> f64 {
    0.30
}

fn default_transit() -> f64 {
    0.25
}

fn default_tarabala() -> f64 {
    0.15
}

fn default_chandrabala() -> f64 {
    0.10
}

fn default_panchang() -> f64 {
    0.10
}

fn default_ghataka() -> f64 {
    0.05
}

fn default_muhurta() -> f64 {
    0.05
}

impl Default for ScoringSection {
    fn default() -> Self {
        Self {
            dasha: default_dasha(),
            transit: default_transit(),
            tarabala: default_tarabala(),
            chandrabala: default_chandrabala(),
            panchang: default_panchang(),
            ghataka: default_ghataka(),
            muhurta: default_muhurta(),
        }
    }
}

impl ScoringSection {
    pub fn as_array(&self) -> [f64; 7] {
        [
            self.dasha,
            self.transit,
            self.tarabala,
            self.chandrabala,
            self.panchang,
            self.ghataka,
            self.muhurta,
        ]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl JyotishConfig {
    /// Load and validate a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: JyotishConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = self.scoring.as_array();
        if weights.iter().any(|w| !(0.0..=1.0).contains(w)) {
            return Err(ConfigError::Invalid(
                "scoring weights must each lie in [0, 1]".into(),
            ));
        }
        let sum = self.scoring.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::Invalid(format!(
                "scoring weights must sum to 1.0, got {sum}"
            )));
        }
        if self.period.max_concurrent_days == 0 {
            return Err(ConfigError::Invalid(
                "period.max_concurrent_days must be greater than 0".into(),
            ));
        }
        if self.period.day_timeout_ms == 0 || self.period.narrative_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "period timeouts must be greater than 0".into(),
            ));
        }
        jyotish_time::parse_time(&self.period.reference_time).map_err(|e| {
            ConfigError::Invalid(format!("period.reference_time: {e}"))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = JyotishConfig::from_toml_str("").unwrap();
        assert_eq!(config, JyotishConfig::default());
        assert_eq!(config.period.parallel_threshold_days, 5);
        assert_eq!(config.period.top_n, 5);
        assert_eq!(config.period.reference_time, "06:00");
    }

    #[test]
    fn default_weights_sum_to_one() {
        assert!((ScoringSection::default().sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = JyotishConfig::from_toml_str(
            r#"
[chart]
ayanamsha = "krishnamurti"
house_system = "equal"

[period]
top_n = 3
"#,
        )
        .unwrap();
        assert_eq!(config.chart.ayanamsha, AyanamshaSystem::Kp);
        assert_eq!(config.chart.house_system, HouseSystem::Equal);
        assert_eq!(config.chart.node_mode, NodeMode::Mean);
        assert_eq!(config.period.top_n, 3);
        assert_eq!(config.period.max_concurrent_days, 8);
    }

    #[test]
    fn bad_weight_sum_rejected() {
        let err = JyotishConfig::from_toml_str("[scoring]\ndasha = 0.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn bad_reference_time_rejected() {
        let err = JyotishConfig::from_toml_str("[period]\nreference_time = \"25:00\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_enum_is_parse_error() {
        let err = JyotishConfig::from_toml_str("[chart]\nayanamsha = \"tropical\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
