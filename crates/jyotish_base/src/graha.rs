//! Vedic planet (graha) enum, rashi lordship and natural nature.

use jyotish_core::Body;
use serde::Serialize;

use crate::rashi::Rashi;

/// The 9 grahas. Serialized by their English names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Graha {
    #[serde(rename = "Sun")]
    Surya,
    #[serde(rename = "Moon")]
    Chandra,
    #[serde(rename = "Mars")]
    Mangal,
    #[serde(rename = "Mercury")]
    Buddh,
    #[serde(rename = "Jupiter")]
    Guru,
    #[serde(rename = "Venus")]
    Shukra,
    #[serde(rename = "Saturn")]
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// Whether a graha is a natural benefic or malefic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nature {
    Benefic,
    Malefic,
}

impl Graha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index in [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ephemeris body backing this graha. Ketu has none; it is derived from Rahu.
    pub const fn body(self) -> Option<Body> {
        match self {
            Self::Surya => Some(Body::Sun),
            Self::Chandra => Some(Body::Moon),
            Self::Mangal => Some(Body::Mars),
            Self::Buddh => Some(Body::Mercury),
            Self::Guru => Some(Body::Jupiter),
            Self::Shukra => Some(Body::Venus),
            Self::Shani => Some(Body::Saturn),
            Self::Rahu => Some(Body::Rahu),
            Self::Ketu => None,
        }
    }

    /// Natural nature used by the dasha component: Jupiter, Venus, Mercury
    /// and Moon are benefic; the rest malefic.
    pub const fn nature(self) -> Nature {
        match self {
            Self::Guru | Self::Shukra | Self::Buddh | Self::Chandra => Nature::Benefic,
            Self::Shani | Self::Mangal | Self::Rahu | Self::Ketu | Self::Surya => Nature::Malefic,
        }
    }

    pub const fn all() -> &'static [Graha; 9] {
        &ALL_GRAHAS
    }
}

impl From<Body> for Graha {
    fn from(body: Body) -> Self {
        match body {
            Body::Sun => Self::Surya,
            Body::Moon => Self::Chandra,
            Body::Mars => Self::Mangal,
            Body::Mercury => Self::Buddh,
            Body::Jupiter => Self::Guru,
            Body::Venus => Self::Shukra,
            Body::Saturn => Self::Shani,
            Body::Rahu => Self::Rahu,
        }
    }
}

/// Planetary lord of a rashi.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => Graha::Mangal,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}

/// The n-th rashi from a given rashi (0-based index, 1-based offset).
///
/// `nth_rashi_from(0, 1)` = 0 (same rashi), `nth_rashi_from(0, 12)` = 11.
pub fn nth_rashi_from(rashi_index: u8, offset: u8) -> u8 {
    ((u16::from(rashi_index) + u16::from(offset) + 11) % 12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn body_roundtrip_except_ketu() {
        for g in ALL_GRAHAS {
            match g.body() {
                Some(b) => assert_eq!(Graha::from(b), g),
                None => assert_eq!(g, Graha::Ketu),
            }
        }
    }

    #[test]
    fn lords() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Karka), Graha::Chandra);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Meena), Graha::Guru);
    }

    #[test]
    fn nth_rashi() {
        assert_eq!(nth_rashi_from(0, 1), 0);
        assert_eq!(nth_rashi_from(0, 2), 1);
        assert_eq!(nth_rashi_from(11, 2), 0);
        assert_eq!(nth_rashi_from(0, 12), 11);
    }

    #[test]
    fn nature_split() {
        let benefics = ALL_GRAHAS
            .iter()
            .filter(|g| g.nature() == Nature::Benefic)
            .count();
        assert_eq!(benefics, 4);
    }

    #[test]
    fn serializes_english() {
        assert_eq!(serde_json::to_string(&Graha::Guru).unwrap(), "\"Jupiter\"");
        assert_eq!(serde_json::to_string(&Graha::Ketu).unwrap(), "\"Ketu\"");
    }
}
