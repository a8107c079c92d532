//! Validated geographic coordinates.

use serde::{Deserialize, Serialize};

use crate::error::EphemerisError;

/// Observer location on Earth. Immutable once validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct GeoLocation {
    latitude_deg: f64,
    longitude_deg: f64,
}

#[derive(Deserialize)]
struct RawLocation {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl TryFrom<RawLocation> for GeoLocation {
    type Error = EphemerisError;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        Self::new(raw.latitude_deg, raw.longitude_deg)
    }
}

impl GeoLocation {
    /// Latitude in [-90, 90] (north positive), longitude in [-180, 180] (east positive).
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, EphemerisError> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(EphemerisError::InvalidLocation(
                "latitude must be within [-90, 90] degrees",
            ));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(EphemerisError::InvalidLocation(
                "longitude must be within [-180, 180] degrees",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    pub const fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub const fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(GeoLocation::new(90.0, -180.0).is_ok());
        assert!(GeoLocation::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        assert!(GeoLocation::new(90.1, 0.0).is_err());
        assert!(GeoLocation::new(0.0, 180.5).is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
    }
}
