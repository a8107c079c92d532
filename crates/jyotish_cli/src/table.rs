//! Ephemeris served from a sampled JSON table.
//!
//! Samples hold tropical body states and house cusps at increasing UT
//! Julian days. Queries between two samples interpolate linearly in time,
//! taking the short way round the circle for angles. Queries outside the
//! sampled span are [`EphemerisError::OutOfRange`].
//!
//! Cusps move about a degree every four minutes; tables meant for house
//! work need samples much denser than daily.
//!
//! ```json
//! {
//!   "ayanamsa_deg": 24.1,
//!   "samples": [
//!     {
//!       "jd_ut": 2460376.5,
//!       "bodies": { "Sun": { "longitude_deg": 346.9, "speed_deg_per_day": 1.0 } },
//!       "cusps": [100, 128, 157, 188, 220, 251, 280, 308, 337, 8, 40, 71]
//!     }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use jyotish_core::{
    AyanamshaSystem, Body, EclipticState, Ephemeris, EphemerisError, GeoLocation, HouseSystem,
    Instant, NodeMode, QueryFlags, ayanamsha_mean_deg,
};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BodySample {
    pub longitude_deg: f64,
    #[serde(default)]
    pub latitude_deg: f64,
    #[serde(default = "default_distance")]
    pub distance_au: f64,
    #[serde(default)]
    pub speed_deg_per_day: f64,
}

fn default_distance() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sample {
    pub jd_ut: f64,
    /// `Rahu` is the mean node.
    pub bodies: BTreeMap<Body, BodySample>,
    /// True node; queries in true-node mode fall back to the mean node.
    #[serde(default)]
    pub true_rahu: Option<BodySample>,
    pub cusps: [f64; 12],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EphemerisTable {
    /// Constant ayanamsha. When absent the built-in precession model is used.
    #[serde(default)]
    pub ayanamsa_deg: Option<f64>,
    pub samples: Vec<Sample>,
}

#[derive(Debug, Clone)]
pub struct TableEphemeris {
    table: EphemerisTable,
}

impl TableEphemeris {
    pub fn new(table: EphemerisTable) -> Result<Self> {
        ensure!(!table.samples.is_empty(), "ephemeris table has no samples");
        for pair in table.samples.windows(2) {
            if pair[1].jd_ut <= pair[0].jd_ut {
                bail!(
                    "ephemeris samples must have increasing jd_ut ({} then {})",
                    pair[0].jd_ut,
                    pair[1].jd_ut
                );
            }
        }
        for sample in &table.samples {
            let finite = sample.jd_ut.is_finite()
                && sample.cusps.iter().all(|c| c.is_finite())
                && sample.bodies.values().all(|b| b.longitude_deg.is_finite());
            ensure!(finite, "non-finite value in sample at jd_ut {}", sample.jd_ut);
        }
        Ok(Self { table })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let table: EphemerisTable =
            serde_json::from_str(json).context("failed to parse ephemeris table")?;
        Self::new(table)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ephemeris table {}", path.display()))?;
        let eph = Self::from_json_str(&json)
            .with_context(|| format!("invalid ephemeris table {}", path.display()))?;
        let (first_jd, last_jd) = eph.span();
        debug!(
            path = %path.display(),
            samples = eph.table.samples.len(),
            first_jd,
            last_jd,
            "ephemeris table loaded"
        );
        Ok(eph)
    }

    pub fn span(&self) -> (f64, f64) {
        let samples = &self.table.samples;
        (samples[0].jd_ut, samples[samples.len() - 1].jd_ut)
    }

    /// Bracketing samples and the fraction of the way from the first to
    /// the second.
    fn bracket(&self, jd: f64) -> Result<(&Sample, &Sample, f64), EphemerisError> {
        let samples = &self.table.samples;
        let (first, last) = self.span();
        if !(first..=last).contains(&jd) {
            return Err(EphemerisError::OutOfRange { jd_ut: jd });
        }
        let upper = samples.partition_point(|s| s.jd_ut < jd);
        if upper == 0 {
            return Ok((&samples[0], &samples[0], 0.0));
        }
        let (a, b) = (&samples[upper - 1], &samples[upper]);
        Ok((a, b, (jd - a.jd_ut) / (b.jd_ut - a.jd_ut)))
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate between two angles along the shorter arc.
fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    let delta = (b - a + 540.0).rem_euclid(360.0) - 180.0;
    (a + delta * t).rem_euclid(360.0)
}

fn body_sample(sample: &Sample, body: Body, node_mode: NodeMode) -> Option<BodySample> {
    match (body, node_mode) {
        (Body::Rahu, NodeMode::True) => sample.true_rahu.or_else(|| sample.bodies.get(&body).copied()),
        _ => sample.bodies.get(&body).copied(),
    }
}

impl Ephemeris for TableEphemeris {
    fn position(
        &self,
        instant: Instant,
        body: Body,
        flags: QueryFlags,
    ) -> Result<EclipticState, EphemerisError> {
        let (a, b, t) = self.bracket(instant.jd_ut())?;
        let missing = || EphemerisError::BodyUnavailable {
            body,
            reason: "not in table".into(),
        };
        let sa = body_sample(a, body, flags.node_mode).ok_or_else(missing)?;
        let sb = body_sample(b, body, flags.node_mode).ok_or_else(missing)?;
        Ok(EclipticState {
            longitude_deg: lerp_angle(sa.longitude_deg, sb.longitude_deg, t),
            latitude_deg: lerp(sa.latitude_deg, sb.latitude_deg, t),
            distance_au: lerp(sa.distance_au, sb.distance_au, t),
            speed_longitude_deg_per_day: lerp(sa.speed_deg_per_day, sb.speed_deg_per_day, t),
            speed_latitude_deg_per_day: 0.0,
            speed_distance_au_per_day: 0.0,
        })
    }

    fn ayanamsa_deg(
        &self,
        instant: Instant,
        system: AyanamshaSystem,
    ) -> Result<f64, EphemerisError> {
        Ok(self.table.ayanamsa_deg.unwrap_or_else(|| {
            ayanamsha_mean_deg(system, jyotish_time::jd_to_centuries(instant.jd_ut()))
        }))
    }

    /// The table carries one cusp set; location and system are not consulted.
    fn house_cusps(
        &self,
        instant: Instant,
        _location: GeoLocation,
        _system: HouseSystem,
    ) -> Result<[f64; 12], EphemerisError> {
        let (a, b, t) = self.bracket(instant.jd_ut())?;
        Ok(std::array::from_fn(|i| lerp_angle(a.cusps[i], b.cusps[i], t)))
    }
}
