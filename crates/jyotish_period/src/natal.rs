//! Birth context: validated birth details and the natal chart facts every
//! day of a range is measured against.

use jyotish_base::{Chart, ChartSettings, Graha, Nakshatra, Rashi, compute_chart};
use jyotish_core::{Ephemeris, GeoLocation, Instant};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{PeriodError, PeriodResult};

/// Birth details as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    /// `DD/MM/YYYY` or `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`.
    pub time: String,
    /// Fixed offset (`+05:30`) or IANA zone name.
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatalContext {
    pub details: BirthDetails,
    pub birth_instant: Instant,
    pub location: GeoLocation,
    pub chart: Chart,
    pub moon_longitude: f64,
    pub moon_rashi: Rashi,
    pub moon_nakshatra: Nakshatra,
    pub ascendant_rashi: Rashi,
}

impl NatalContext {
    /// Validate the details and compute the natal chart.
    ///
    /// The natal Moon is required; every Moon-relative component depends
    /// on it.
    pub fn compute(
        ephemeris: &dyn Ephemeris,
        details: &BirthDetails,
        settings: ChartSettings,
    ) -> PeriodResult<Self> {
        let location = GeoLocation::new(details.latitude, details.longitude)
            .map_err(|e| PeriodError::BirthContext(e.to_string()))?;
        let birth_instant = jyotish_time::to_instant(&details.date, &details.time, &details.timezone)?;
        let chart = compute_chart(ephemeris, birth_instant, location, settings)?;
        let moon = chart
            .body(Graha::Chandra)
            .ok_or_else(|| PeriodError::BirthContext("natal Moon unavailable".into()))?;
        let ctx = Self {
            details: details.clone(),
            birth_instant,
            location,
            moon_longitude: moon.longitude(),
            moon_rashi: moon.placement.rashi.rashi,
            moon_nakshatra: moon.placement.nakshatra.nakshatra,
            ascendant_rashi: chart.ascendant.rashi.rashi,
            chart,
        };
        info!(
            moon_nakshatra = ctx.moon_nakshatra.name(),
            moon_rashi = ctx.moon_rashi.name(),
            "natal context ready"
        );
        Ok(ctx)
    }
}
