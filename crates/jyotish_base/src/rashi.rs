//! Rashi (zodiac sign) and DMS (degrees-minutes-seconds) computation.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees, starting from
//! Mesha (Aries) at 0 degrees sidereal.

use serde::Serialize;

use crate::util::normalize_360;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha = 0 .. Meena = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi by 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

/// Sign position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    pub rashi_index: u8,
    pub dms: Dms,
    /// Decimal degrees within the rashi, [0, 30).
    pub degrees_in_rashi: f64,
}

pub fn dms_to_deg(dms: &Dms) -> f64 {
    f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to DMS. Negative input uses its absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - f64::from(degrees)) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - f64::from(minutes)) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// `DD:MM:SS` with whole seconds, carrying rounded-up seconds into minutes.
pub fn format_dms(deg: f64) -> String {
    let total = (deg.abs() * 3600.0).round() as u64;
    format!("{:02}:{:02}:{:02}", total / 3600, (total / 60) % 60, total % 60)
}

/// Rashi of a sidereal longitude. Mesha = [0, 30), Vrishabha = [30, 60), ...
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_index = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = lon - f64::from(rashi_index) * 30.0;
    RashiInfo {
        rashi: ALL_RASHIS[rashi_index as usize],
        rashi_index,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_boundaries() {
        assert_eq!(rashi_from_longitude(29.999).rashi_index, 0);
        assert_eq!(rashi_from_longitude(30.0).rashi, Rashi::Vrishabha);
        assert_eq!(rashi_from_longitude(359.999).rashi, Rashi::Meena);
        assert_eq!(rashi_from_longitude(360.0).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(-0.5).rashi, Rashi::Meena);
    }

    #[test]
    fn indices_match_order() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), *r);
        }
        assert_eq!(Rashi::from_index(13), Rashi::Vrishabha);
    }

    #[test]
    fn dms_roundtrip() {
        let dms = deg_to_dms(23.853);
        assert_eq!(dms.degrees, 23);
        assert_eq!(dms.minutes, 51);
        assert!((dms_to_deg(&dms) - 23.853).abs() < 1e-10);
    }

    #[test]
    fn format_dms_carries() {
        assert_eq!(format_dms(15.5), "15:30:00");
        assert_eq!(format_dms(29.999_999_9), "30:00:00");
        assert_eq!(format_dms(0.0), "00:00:00");
    }
}
