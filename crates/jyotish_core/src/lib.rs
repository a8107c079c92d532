//! Ephemeris boundary: body identifiers, query flags and the adapter trait.
//!
//! The astronomical computation itself (tropical longitude, speed, house
//! cusps) is supplied by an external [`Ephemeris`] implementation. Every
//! query carries its parameters explicitly (ayanamsha system, node mode,
//! house system); adapters hold no process-wide sidereal mode, so charts
//! with different settings can be computed concurrently.

pub mod ayanamsha;
pub mod error;
pub mod geo;
pub mod house_system;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use ayanamsha::{AyanamshaSystem, ayanamsha_mean_deg, general_precession_longitude_deg};
pub use error::EphemerisError;
pub use geo::GeoLocation;
pub use house_system::{ALL_HOUSE_SYSTEMS, HouseSystem};
pub use jyotish_time::Instant;

/// Bodies an adapter must serve.
///
/// Ketu is deliberately absent: it is always derived from [`Body::Rahu`]
/// downstream and never queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    /// Ascending lunar node; mean or true per [`QueryFlags::node_mode`].
    Rahu,
}

pub const ALL_BODIES: [Body; 8] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::Rahu,
];

impl Body {
    /// Numeric body code as used by common ephemeris libraries.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Rahu => 10,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Sun),
            1 => Some(Self::Moon),
            2 => Some(Self::Mercury),
            3 => Some(Self::Venus),
            4 => Some(Self::Mars),
            5 => Some(Self::Jupiter),
            6 => Some(Self::Saturn),
            10 => Some(Self::Rahu),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
        }
    }

    pub const fn all() -> &'static [Body] {
        &ALL_BODIES
    }
}

/// Mean or true (perturbed) lunar node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMode {
    #[default]
    Mean,
    True,
}

/// Per-query options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryFlags {
    pub node_mode: NodeMode,
}

/// Tropical ecliptic state of a body, of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticState {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_au: f64,
    pub speed_longitude_deg_per_day: f64,
    pub speed_latitude_deg_per_day: f64,
    pub speed_distance_au_per_day: f64,
}

/// External astronomical source.
///
/// Longitudes at this boundary are always tropical; sidereal conversion is
/// done by the caller with [`Ephemeris::ayanamsa_deg`].
pub trait Ephemeris: Send + Sync {
    /// Tropical ecliptic state of `body` at `instant`.
    fn position(
        &self,
        instant: Instant,
        body: Body,
        flags: QueryFlags,
    ) -> Result<EclipticState, EphemerisError>;

    /// Ayanamsha in degrees. Defaults to the built-in precession model.
    fn ayanamsa_deg(
        &self,
        instant: Instant,
        system: AyanamshaSystem,
    ) -> Result<f64, EphemerisError> {
        Ok(ayanamsha_mean_deg(
            system,
            jyotish_time::jd_to_centuries(instant.jd_ut()),
        ))
    }

    /// Tropical longitudes of cusps 1..=12 (index 0 is the Ascendant).
    fn house_cusps(
        &self,
        instant: Instant,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<[f64; 12], EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for Arc<E> {
    fn position(
        &self,
        instant: Instant,
        body: Body,
        flags: QueryFlags,
    ) -> Result<EclipticState, EphemerisError> {
        (**self).position(instant, body, flags)
    }

    fn ayanamsa_deg(
        &self,
        instant: Instant,
        system: AyanamshaSystem,
    ) -> Result<f64, EphemerisError> {
        (**self).ayanamsa_deg(instant, system)
    }

    fn house_cusps(
        &self,
        instant: Instant,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<[f64; 12], EphemerisError> {
        (**self).house_cusps(instant, location, system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_code_roundtrip() {
        for &body in Body::all() {
            assert_eq!(Body::from_code(body.code()), Some(body));
        }
        assert_eq!(Body::from_code(11), None);
    }

    #[test]
    fn node_mode_default_is_mean() {
        assert_eq!(QueryFlags::default().node_mode, NodeMode::Mean);
    }
}
