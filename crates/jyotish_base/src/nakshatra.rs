//! Nakshatra (lunar mansion) computation, 27-fold scheme.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13°20', each with 4
//! padas of 3°20'. Every nakshatra has a Vimshottari star lord.

use serde::Serialize;

use crate::graha::Graha;
use crate::util::normalize_360;
use crate::vimshottari::nakshatra_lord;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0 .. Revati = 26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (Ashwini = 1 .. Revati = 27).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Vimshottari star lord.
    pub const fn lord(self) -> Graha {
        nakshatra_lord(self.index())
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

/// Nakshatra position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    /// Pada 1..=4.
    pub pada: u8,
    pub lord: Graha,
    /// Degrees traversed within the nakshatra, [0, 13.333...).
    pub degrees_in_nakshatra: f64,
    pub degrees_in_pada: f64,
}

pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - f64::from(nak_idx) * NAKSHATRA_SPAN_27;
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);
    let nakshatra = ALL_NAKSHATRAS_27[nak_idx as usize];

    NakshatraInfo {
        nakshatra,
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        lord: nakshatra.lord(),
        degrees_in_nakshatra,
        degrees_in_pada: degrees_in_nakshatra - f64::from(pada_idx) * PADA_SPAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ashwini_start() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
        assert_eq!(info.lord, Graha::Ketu);
    }

    #[test]
    fn rohini_at_40() {
        let info = nakshatra_from_longitude(40.0 + 1e-9);
        assert_eq!(info.nakshatra, Nakshatra::Rohini);
        assert_eq!(info.lord, Graha::Chandra);
    }

    #[test]
    fn pada_boundaries() {
        assert_eq!(nakshatra_from_longitude(PADA_SPAN - 1e-9).pada, 1);
        assert_eq!(nakshatra_from_longitude(PADA_SPAN + 1e-9).pada, 2);
        assert_eq!(nakshatra_from_longitude(NAKSHATRA_SPAN_27 - 1e-9).pada, 4);
    }

    #[test]
    fn revati_end() {
        let info = nakshatra_from_longitude(359.999);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.pada, 4);
        assert_eq!(info.lord, Graha::Buddh);
    }

    #[test]
    fn numbers_are_one_based() {
        assert_eq!(Nakshatra::Ashwini.number(), 1);
        assert_eq!(Nakshatra::Revati.number(), 27);
    }
}
