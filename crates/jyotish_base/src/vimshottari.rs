//! Vimshottari cycle: 9 lords with proportional year allocations (120 years).
//!
//! The same ordering and weights drive the dasha periods and the KP
//! sub-lord subdivision of a nakshatra.

use crate::graha::Graha;

/// Lord order: Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Mahadasha years, parallel to [`VIMSHOTTARI_SEQUENCE`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Year length for period arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Position of a graha in the Vimshottari sequence.
pub const fn vimshottari_index(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

pub const fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[vimshottari_index(graha)]
}

/// Star lord of a nakshatra (0 = Ashwini .. 26 = Revati).
pub const fn nakshatra_lord(nakshatra_index: u8) -> Graha {
    VIMSHOTTARI_SEQUENCE[(nakshatra_index % 9) as usize]
}

/// The cycle starting at `start`, wrapping around.
pub fn cycle_from(start: Graha) -> impl Iterator<Item = Graha> {
    let s = vimshottari_index(start);
    (0..9).map(move |i| VIMSHOTTARI_SEQUENCE[(s + i) % 9])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_years() {
        let sum: f64 = VIMSHOTTARI_YEARS.iter().sum();
        assert!((sum - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn index_matches_sequence() {
        for (i, g) in VIMSHOTTARI_SEQUENCE.iter().enumerate() {
            assert_eq!(vimshottari_index(*g), i);
        }
    }

    #[test]
    fn star_lords_repeat_every_nine() {
        assert_eq!(nakshatra_lord(0), Graha::Ketu);
        assert_eq!(nakshatra_lord(3), Graha::Chandra);
        assert_eq!(nakshatra_lord(7), Graha::Shani);
        assert_eq!(nakshatra_lord(26), Graha::Buddh);
        for i in 0..18 {
            assert_eq!(nakshatra_lord(i), nakshatra_lord(i + 9));
        }
    }

    #[test]
    fn cycle_wraps() {
        let c: Vec<_> = cycle_from(Graha::Buddh).take(3).collect();
        assert_eq!(c, vec![Graha::Buddh, Graha::Ketu, Graha::Shukra]);
    }
}
