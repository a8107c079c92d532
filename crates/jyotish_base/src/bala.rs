//! Moon-relative strength (tarabala, chandrabala) and ishta/kashta phala.

use serde::Serialize;

use crate::bhava::whole_sign_house;
use crate::graha::Graha;
use crate::util::normalize_360;

/// The nine taras, counted from the birth nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tara {
    Janma,
    Sampat,
    Vipat,
    Kshema,
    Pratyak,
    Sadhana,
    Naidhana,
    Mitra,
    ParamaMitra,
}

const ALL_TARAS: [Tara; 9] = [
    Tara::Janma,
    Tara::Sampat,
    Tara::Vipat,
    Tara::Kshema,
    Tara::Pratyak,
    Tara::Sadhana,
    Tara::Naidhana,
    Tara::Mitra,
    Tara::ParamaMitra,
];

impl Tara {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Janma => "Janma",
            Self::Sampat => "Sampat",
            Self::Vipat => "Vipat",
            Self::Kshema => "Kshema",
            Self::Pratyak => "Pratyak",
            Self::Sadhana => "Sadhana",
            Self::Naidhana => "Naidhana",
            Self::Mitra => "Mitra",
            Self::ParamaMitra => "Parama Mitra",
        }
    }

    /// 1..=9.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Strength in [0, 1]. Vipat, Pratyak and Naidhana are the weak taras.
    pub const fn strength(self) -> f64 {
        match self {
            Self::Janma => 0.3,
            Self::Sampat => 0.9,
            Self::Vipat => 0.1,
            Self::Kshema => 0.8,
            Self::Pratyak => 0.2,
            Self::Sadhana => 0.9,
            Self::Naidhana => 0.0,
            Self::Mitra => 0.7,
            Self::ParamaMitra => 1.0,
        }
    }
}

/// Tara of the current nakshatra counted from the birth nakshatra (0-based indices).
pub fn tara(birth_nakshatra_index: u8, current_nakshatra_index: u8) -> Tara {
    let count = (i16::from(current_nakshatra_index) - i16::from(birth_nakshatra_index))
        .rem_euclid(27);
    ALL_TARAS[(count % 9) as usize]
}

/// Tarabala component score in [-50, 50]: `strength × 100 − 50`.
pub fn tarabala_score(birth_nakshatra_index: u8, current_nakshatra_index: u8) -> f64 {
    tara(birth_nakshatra_index, current_nakshatra_index).strength() * 100.0 - 50.0
}

/// Chandrabala: transit Moon's house from the natal Moon sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Chandrabala {
    pub house: u8,
    pub score: f64,
}

/// Kendra (1, 4, 7, 10) 40, trikona (5, 9) 30, upachaya (3, 6, 11) 20, else 0.
pub fn chandrabala(natal_moon_rashi: u8, transit_moon_rashi: u8) -> Chandrabala {
    let house = whole_sign_house(transit_moon_rashi, natal_moon_rashi);
    let score = match house {
        1 | 4 | 7 | 10 => 40.0,
        5 | 9 => 30.0,
        3 | 6 | 11 => 20.0,
        _ => 0.0,
    };
    Chandrabala { house, score }
}

/// Deep exaltation point of the seven visible grahas, sidereal degrees.
pub const fn deep_exaltation_deg(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya => Some(10.0),
        Graha::Chandra => Some(33.0),
        Graha::Mangal => Some(298.0),
        Graha::Buddh => Some(165.0),
        Graha::Guru => Some(95.0),
        Graha::Shukra => Some(357.0),
        Graha::Shani => Some(200.0),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Ucha bala in virupas: 60 at deep exaltation, 0 at deep debilitation.
pub fn ucha_bala(graha: Graha, sidereal_lon: f64) -> Option<f64> {
    let exalt = deep_exaltation_deg(graha)?;
    let diff = (normalize_360(sidereal_lon) - exalt).abs();
    let dist = if diff > 180.0 { 360.0 - diff } else { diff };
    Some(60.0 * (1.0 - dist / 180.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IshtaKashta {
    pub ishta: f64,
    pub kashta: f64,
    /// `ishta / (kashta + 0.1)`.
    pub ratio: f64,
}

impl IshtaKashta {
    fn from_ishta(ishta: f64) -> Self {
        let kashta = 60.0 - ishta;
        Self {
            ishta,
            kashta,
            ratio: ishta / (kashta + 0.1),
        }
    }
}

/// Ishta and kashta phala from ucha bala and cheshta bala (both virupas).
///
/// `ishta = sqrt(ucha × cheshta)` and `kashta = 60 − ishta`. Cheshta is
/// clamped to [0, 60]. The nodes have no exaltation point and get 30/30.
pub fn ishta_kashta_phala(graha: Graha, sidereal_lon: f64, cheshta_bala: f64) -> IshtaKashta {
    match ucha_bala(graha, sidereal_lon) {
        Some(ucha) => IshtaKashta::from_ishta((ucha * cheshta_bala.clamp(0.0, 60.0)).sqrt()),
        None => IshtaKashta::from_ishta(30.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tara_counts_forward() {
        assert_eq!(tara(5, 5), Tara::Janma);
        assert_eq!(tara(5, 6), Tara::Sampat);
        assert_eq!(tara(5, 11), Tara::Naidhana);
        assert_eq!(tara(5, 14), Tara::Janma);
        // wraps past Revati
        assert_eq!(tara(25, 1), Tara::Kshema);
    }

    #[test]
    fn tarabala_range() {
        for b in 0..27 {
            for c in 0..27 {
                let s = tarabala_score(b, c);
                assert!((-50.0..=50.0).contains(&s));
            }
        }
        assert!((tarabala_score(0, 8) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn chandrabala_houses() {
        assert_eq!(chandrabala(3, 3).score, 40.0);
        assert_eq!(chandrabala(3, 7).house, 5);
        assert_eq!(chandrabala(3, 7).score, 30.0);
        assert_eq!(chandrabala(3, 5).score, 20.0);
        assert_eq!(chandrabala(3, 4).score, 0.0);
    }

    #[test]
    fn ucha_bala_extremes() {
        assert!((ucha_bala(Graha::Surya, 10.0).unwrap() - 60.0).abs() < 1e-12);
        assert!(ucha_bala(Graha::Surya, 190.0).unwrap().abs() < 1e-12);
        assert!((ucha_bala(Graha::Surya, 100.0).unwrap() - 30.0).abs() < 1e-12);
        // Venus wraps through 0 Aries.
        assert!((ucha_bala(Graha::Shukra, 3.0).unwrap() - 58.0).abs() < 1e-12);
        assert_eq!(ucha_bala(Graha::Rahu, 50.0), None);
    }

    #[test]
    fn ishta_kashta_sum_to_sixty() {
        let p = ishta_kashta_phala(Graha::Surya, 10.0, 60.0);
        assert!((p.ishta - 60.0).abs() < 1e-12);
        assert!(p.kashta.abs() < 1e-12);
        assert!((p.ratio - 600.0).abs() < 1e-9);

        // ucha 30, cheshta 30: ishta 30.
        let p = ishta_kashta_phala(Graha::Surya, 100.0, 30.0);
        assert!((p.ishta - 30.0).abs() < 1e-12);
        assert!((p.ishta + p.kashta - 60.0).abs() < 1e-12);

        let debilitated = ishta_kashta_phala(Graha::Surya, 190.0, 45.0);
        assert!(debilitated.ishta.abs() < 1e-12);
        assert!((debilitated.kashta - 60.0).abs() < 1e-12);
    }

    #[test]
    fn ishta_kashta_for_nodes_and_bad_cheshta() {
        let node = ishta_kashta_phala(Graha::Ketu, 123.0, 45.0);
        assert_eq!(node.ishta, 30.0);
        assert_eq!(node.kashta, 30.0);
        let negative = ishta_kashta_phala(Graha::Guru, 95.0, -5.0);
        assert_eq!(negative.ishta, 0.0);
        assert!(!negative.ratio.is_nan());
    }
}
