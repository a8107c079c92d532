//! House (bhava) construction under two explicitly separate conventions.
//!
//! - [`HouseDivision::WholeSign`]: each house is one full sign, the
//!   Ascendant's sign is house 1. Used for general chart display and for
//!   Moon-relative counting.
//! - [`HouseDivision::QuadrantCusps`]: unequal houses bounded by the
//!   sidereal cusps reported by the ephemeris adapter. Used for KP
//!   occupancy and significators.
//!
//! The two answer "which house is this body in" differently near sign
//! boundaries; callers pick one explicitly.

use serde::Serialize;

use crate::graha::{Graha, rashi_lord};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::{forward_arc, normalize_360};

/// House division strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HouseDivision {
    WholeSign,
    QuadrantCusps,
}

/// One house of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct House {
    /// 1..=12.
    pub number: u8,
    /// Sign containing the house's starting cusp.
    pub sign: Rashi,
    pub start_deg: f64,
    /// Exclusive end; may be numerically below `start_deg` when the house wraps past 360°.
    pub end_deg: f64,
    /// Lord of `sign`.
    pub lord: Graha,
}

impl House {
    /// Arc length of the house in degrees.
    pub fn span_deg(&self) -> f64 {
        let arc = forward_arc(self.start_deg, self.end_deg);
        if arc == 0.0 { 360.0 } else { arc }
    }
}

/// Whole-sign house of a body: `((body_sign − asc_sign) mod 12) + 1`.
pub fn whole_sign_house(body_rashi_index: u8, asc_rashi_index: u8) -> u8 {
    ((i16::from(body_rashi_index) - i16::from(asc_rashi_index)).rem_euclid(12) + 1) as u8
}

/// Quadrant-cusp house of a sidereal longitude.
///
/// House `i + 1` spans `[C[i], C[i+1])`, or wraps past 360° when
/// `C[i] > C[i+1]`. Falls back to house 12 if no interval matches, which
/// only happens for degenerate cusp arrays.
pub fn cusp_house(cusps: &[f64; 12], sidereal_lon: f64) -> u8 {
    let lon = normalize_360(sidereal_lon);
    for i in 0..12 {
        let start = cusps[i];
        let end = cusps[(i + 1) % 12];
        let inside = if start < end {
            start <= lon && lon < end
        } else if start > end {
            lon >= start || lon < end
        } else {
            false
        };
        if inside {
            return i as u8 + 1;
        }
    }
    12
}

/// Twelve whole-sign houses starting from the Ascendant's sign.
pub fn whole_sign_houses(ascendant_sidereal: f64) -> [House; 12] {
    let asc_sign = rashi_from_longitude(ascendant_sidereal).rashi_index;
    std::array::from_fn(|i| {
        let sign = Rashi::from_index(asc_sign + i as u8);
        let start_deg = f64::from(sign.index()) * 30.0;
        House {
            number: i as u8 + 1,
            sign,
            start_deg,
            end_deg: normalize_360(start_deg + 30.0),
            lord: rashi_lord(sign),
        }
    })
}

/// Twelve houses bounded by sidereal quadrant cusps.
pub fn cusp_houses(cusps: &[f64; 12]) -> [House; 12] {
    std::array::from_fn(|i| {
        let sign = rashi_from_longitude(cusps[i]).rashi;
        House {
            number: i as u8 + 1,
            sign,
            start_deg: cusps[i],
            end_deg: cusps[(i + 1) % 12],
            lord: rashi_lord(sign),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_cusps(start: f64) -> [f64; 12] {
        std::array::from_fn(|i| normalize_360(start + i as f64 * 30.0))
    }

    #[test]
    fn whole_sign_formula() {
        assert_eq!(whole_sign_house(0, 0), 1);
        assert_eq!(whole_sign_house(11, 0), 12);
        assert_eq!(whole_sign_house(0, 11), 2);
        assert_eq!(whole_sign_house(5, 9), 9);
    }

    #[test]
    fn whole_sign_houses_from_leo() {
        let houses = whole_sign_houses(125.0);
        assert_eq!(houses[0].sign, Rashi::Simha);
        assert_eq!(houses[0].lord, Graha::Surya);
        assert_eq!(houses[8].sign, Rashi::Mesha);
        assert!((houses[7].start_deg - 330.0).abs() < 1e-12);
        assert!(houses[7].end_deg.abs() < 1e-12);
        assert!((houses[7].span_deg() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn cusp_lookup_simple_and_wrapping() {
        let cusps = equal_cusps(345.0);
        // house 1 = [345, 15) wraps past 360
        assert_eq!(cusp_house(&cusps, 350.0), 1);
        assert_eq!(cusp_house(&cusps, 5.0), 1);
        assert_eq!(cusp_house(&cusps, 15.0), 2);
        assert_eq!(cusp_house(&cusps, 344.999), 12);
    }

    #[test]
    fn cusp_lookup_unequal() {
        let cusps = [
            10.0, 38.0, 70.0, 101.0, 129.0, 160.0, 190.0, 218.0, 250.0, 281.0, 309.0, 340.0,
        ];
        assert_eq!(cusp_house(&cusps, 37.9), 1);
        assert_eq!(cusp_house(&cusps, 100.0), 3);
        assert_eq!(cusp_house(&cusps, 355.0), 12);
        assert_eq!(cusp_house(&cusps, 9.0), 12);
    }

    #[test]
    fn degenerate_cusps_default_to_twelve() {
        assert_eq!(cusp_house(&[0.0; 12], 123.0), 12);
    }

    #[test]
    fn cusp_houses_carry_lords() {
        let houses = cusp_houses(&equal_cusps(95.0));
        assert_eq!(houses[0].sign, Rashi::Karka);
        assert_eq!(houses[0].lord, Graha::Chandra);
        assert!((houses[11].end_deg - 95.0).abs() < 1e-12);
    }
}
