//! Sidereal chart engine.
//!
//! Converts tropical ephemeris output into sidereal placements, houses and
//! the Ascendant. The ayanamsha is evaluated once per chart and reused for
//! every body and every cusp. A failing body does not fail the chart; it is
//! reported as [`BodyReading::Unavailable`].

use jyotish_core::{
    AyanamshaSystem, Body, Ephemeris, GeoLocation, HouseSystem, Instant, NodeMode, QueryFlags,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::bhava::{
    House, HouseDivision, cusp_house, cusp_houses, whole_sign_house, whole_sign_houses,
};
use crate::dignity::{Dignity, dignity};
use crate::error::ChartError;
use crate::graha::Graha;
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::rashi::{RashiInfo, rashi_from_longitude};
use crate::util::normalize_360;

/// Settings that select the sidereal frame and house cusps of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ChartSettings {
    pub ayanamsha: AyanamshaSystem,
    pub node_mode: NodeMode,
    pub house_system: HouseSystem,
}

/// Sign and nakshatra view of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZodiacPlacement {
    pub longitude_deg: f64,
    pub rashi: RashiInfo,
    pub nakshatra: NakshatraInfo,
}

impl ZodiacPlacement {
    pub fn of(sidereal_lon: f64) -> Self {
        let longitude_deg = normalize_360(sidereal_lon);
        Self {
            longitude_deg,
            rashi: rashi_from_longitude(longitude_deg),
            nakshatra: nakshatra_from_longitude(longitude_deg),
        }
    }
}

/// Sidereal position of one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    pub graha: Graha,
    pub placement: ZodiacPlacement,
    pub latitude_deg: f64,
    pub distance_au: f64,
    pub speed_deg_per_day: f64,
    pub retrograde: bool,
    pub whole_sign_house: u8,
    pub cusp_house: u8,
    pub dignity: Dignity,
}

impl BodyPosition {
    pub fn longitude(&self) -> f64 {
        self.placement.longitude_deg
    }

    pub fn house(&self, division: HouseDivision) -> u8 {
        match division {
            HouseDivision::WholeSign => self.whole_sign_house,
            HouseDivision::QuadrantCusps => self.cusp_house,
        }
    }
}

/// Per-body outcome inside a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BodyReading {
    Computed(BodyPosition),
    Unavailable { graha: Graha, reason: String },
}

impl BodyReading {
    pub fn graha(&self) -> Graha {
        match self {
            Self::Computed(p) => p.graha,
            Self::Unavailable { graha, .. } => *graha,
        }
    }

    pub fn position(&self) -> Option<&BodyPosition> {
        match self {
            Self::Computed(p) => Some(p),
            Self::Unavailable { .. } => None,
        }
    }
}

/// A sidereal chart snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub instant: Instant,
    pub location: GeoLocation,
    pub settings: ChartSettings,
    pub ayanamsa_deg: f64,
    pub ascendant: ZodiacPlacement,
    /// Sidereal quadrant cusps, index 0 = house 1.
    pub cusps: [f64; 12],
    pub whole_sign_houses: [House; 12],
    pub cusp_houses: [House; 12],
    /// One reading per graha in [`crate::graha::ALL_GRAHAS`] order.
    pub bodies: Vec<BodyReading>,
}

impl Chart {
    pub fn body(&self, graha: Graha) -> Option<&BodyPosition> {
        self.bodies
            .iter()
            .find(|r| r.graha() == graha)
            .and_then(BodyReading::position)
    }

    /// Successfully computed positions, in graha order.
    pub fn positions(&self) -> impl Iterator<Item = &BodyPosition> {
        self.bodies.iter().filter_map(BodyReading::position)
    }

    /// Grahas the ephemeris could not serve.
    pub fn unavailable(&self) -> impl Iterator<Item = Graha> + '_ {
        self.bodies
            .iter()
            .filter(|r| r.position().is_none())
            .map(BodyReading::graha)
    }

    pub fn houses(&self, division: HouseDivision) -> &[House; 12] {
        match division {
            HouseDivision::WholeSign => &self.whole_sign_houses,
            HouseDivision::QuadrantCusps => &self.cusp_houses,
        }
    }
}

/// Compute a sidereal chart.
///
/// Errors only when the ayanamsha or the house cusps (and so the
/// Ascendant) are unavailable. Identical inputs give identical charts.
pub fn compute_chart(
    ephemeris: &dyn Ephemeris,
    instant: Instant,
    location: GeoLocation,
    settings: ChartSettings,
) -> Result<Chart, ChartError> {
    let ayanamsa_deg = ephemeris
        .ayanamsa_deg(instant, settings.ayanamsha)
        .map_err(ChartError::Ayanamsha)?;
    if !ayanamsa_deg.is_finite() {
        return Err(ChartError::NonFinite("ayanamsha"));
    }

    let tropical_cusps = ephemeris
        .house_cusps(instant, location, settings.house_system)
        .map_err(ChartError::Houses)?;
    if tropical_cusps.iter().any(|c| !c.is_finite()) {
        return Err(ChartError::NonFinite("house cusps"));
    }
    let cusps: [f64; 12] = std::array::from_fn(|i| normalize_360(tropical_cusps[i] - ayanamsa_deg));
    let ascendant = ZodiacPlacement::of(cusps[0]);
    let asc_sign = ascendant.rashi.rashi_index;

    let flags = QueryFlags {
        node_mode: settings.node_mode,
    };
    let place = |graha: Graha, lon: f64, lat: f64, dist: f64, speed: f64| {
        let placement = ZodiacPlacement::of(lon);
        BodyPosition {
            graha,
            placement,
            latitude_deg: lat,
            distance_au: dist,
            speed_deg_per_day: speed,
            retrograde: speed < 0.0,
            whole_sign_house: whole_sign_house(placement.rashi.rashi_index, asc_sign),
            cusp_house: cusp_house(&cusps, placement.longitude_deg),
            dignity: dignity(graha, placement.longitude_deg),
        }
    };

    let mut bodies = Vec::with_capacity(9);
    for &body in Body::all() {
        let graha = Graha::from(body);
        let reading = match ephemeris.position(instant, body, flags) {
            Ok(state) if state.longitude_deg.is_finite() => BodyReading::Computed(place(
                graha,
                state.longitude_deg - ayanamsa_deg,
                state.latitude_deg,
                state.distance_au,
                state.speed_longitude_deg_per_day,
            )),
            Ok(_) => BodyReading::Unavailable {
                graha,
                reason: "non-finite longitude".to_string(),
            },
            Err(e) => {
                warn!(body = body.name(), jd = instant.jd_ut(), error = %e, "body unavailable");
                BodyReading::Unavailable {
                    graha,
                    reason: e.to_string(),
                }
            }
        };
        bodies.push(reading);
    }

    // Ketu is always the point opposite Rahu, never queried.
    let ketu = match bodies.iter().find(|r| r.graha() == Graha::Rahu) {
        Some(BodyReading::Computed(rahu)) => BodyReading::Computed(place(
            Graha::Ketu,
            rahu.longitude() + 180.0,
            -rahu.latitude_deg,
            rahu.distance_au,
            rahu.speed_deg_per_day,
        )),
        _ => BodyReading::Unavailable {
            graha: Graha::Ketu,
            reason: "derived from Rahu, which is unavailable".to_string(),
        },
    };
    bodies.push(ketu);
    bodies.sort_by_key(BodyReading::graha);

    debug!(
        jd = instant.jd_ut(),
        ayanamsa = ayanamsa_deg,
        asc = ascendant.longitude_deg,
        "chart computed"
    );

    Ok(Chart {
        instant,
        location,
        settings,
        ayanamsa_deg,
        ascendant,
        cusps,
        whole_sign_houses: whole_sign_houses(cusps[0]),
        cusp_houses: cusp_houses(&cusps),
        bodies,
    })
}
