//! Ayanamsha: the tropical → sidereal offset.
//!
//! Each system is defined by its value at J2000.0. The value at any epoch
//! adds the IAU 2006 general precession in longitude to that reference.
//! Adapters that carry their own ayanamsha tables may override
//! [`crate::Ephemeris::ayanamsa_deg`]; this model is the default.

use serde::{Deserialize, Serialize};

/// Sidereal reference systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha): Spica at 0 Libra sidereal.
    #[default]
    Lahiri,
    /// Krishnamurti Paddhati: minimal offset from Lahiri.
    #[serde(alias = "krishnamurti")]
    Kp,
    /// B.V. Raman, zero year about 397 CE.
    Raman,
    /// Fagan-Bradley synetic vernal point.
    FaganBradley,
}

const ALL_SYSTEMS: [AyanamshaSystem; 4] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::Kp,
    AyanamshaSystem::Raman,
    AyanamshaSystem::FaganBradley,
];

impl AyanamshaSystem {
    /// Reference ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => 23.853,
            Self::Kp => 23.850,
            Self::Raman => 22.370,
            Self::FaganBradley => 24.736,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::Kp => "Krishnamurti",
            Self::Raman => "Raman",
            Self::FaganBradley => "Fagan-Bradley",
        }
    }

    pub const fn all() -> &'static [AyanamshaSystem] {
        &ALL_SYSTEMS
    }
}

/// IAU 2006 general precession in ecliptic longitude, degrees.
///
/// `p_A = 5028.796195 T + 1.1054348 T² + 0.00007964 T³ − 0.000023857 T⁴
///        − 0.0000000383 T⁵` arcseconds, T in Julian centuries since J2000.0.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    let arcsec = t * (5028.796195
        + t * (1.1054348 + t * (0.000_079_64 + t * (-0.000_023_857 + t * -0.000_000_038_3))));
    arcsec / 3600.0
}

/// Mean ayanamsha in degrees, `t_centuries` since J2000.0.
pub fn ayanamsha_mean_deg(system: AyanamshaSystem, t_centuries: f64) -> f64 {
    system.reference_j2000_deg() + general_precession_longitude_deg(t_centuries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_at_j2000() {
        for &sys in AyanamshaSystem::all() {
            assert!((ayanamsha_mean_deg(sys, 0.0) - sys.reference_j2000_deg()).abs() < 1e-15);
        }
    }

    #[test]
    fn precession_about_1_397_deg_per_century() {
        let diff = ayanamsha_mean_deg(AyanamshaSystem::Lahiri, 1.0)
            - ayanamsha_mean_deg(AyanamshaSystem::Lahiri, 0.0);
        assert!((diff - 1.397).abs() < 0.01, "one century drift = {diff}");
    }

    #[test]
    fn kp_close_to_lahiri() {
        let t = 0.24;
        let d = ayanamsha_mean_deg(AyanamshaSystem::Lahiri, t)
            - ayanamsha_mean_deg(AyanamshaSystem::Kp, t);
        assert!((d - 0.003).abs() < 1e-12);
    }
}
