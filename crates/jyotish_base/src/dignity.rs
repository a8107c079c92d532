//! Sign dignity of a graha.

use serde::Serialize;

use crate::graha::{Graha, rashi_lord};
use crate::rashi::{Rashi, rashi_from_longitude};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dignity {
    Exalted,
    Moolatrikona,
    OwnSign,
    Debilitated,
    Neutral,
}

impl Dignity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Moolatrikona => "Moolatrikona",
            Self::OwnSign => "Own Sign",
            Self::Debilitated => "Debilitated",
            Self::Neutral => "Neutral",
        }
    }
}

/// Exaltation sign; debilitation is the opposite sign.
pub const fn exaltation_sign(graha: Graha) -> Rashi {
    match graha {
        Graha::Surya => Rashi::Mesha,
        Graha::Chandra => Rashi::Vrishabha,
        Graha::Mangal => Rashi::Makara,
        Graha::Buddh => Rashi::Kanya,
        Graha::Guru => Rashi::Karka,
        Graha::Shukra => Rashi::Meena,
        Graha::Shani => Rashi::Tula,
        Graha::Rahu => Rashi::Vrishabha,
        Graha::Ketu => Rashi::Vrischika,
    }
}

/// Moolatrikona sign and degree range within it.
const fn moolatrikona(graha: Graha) -> Option<(Rashi, f64, f64)> {
    match graha {
        Graha::Surya => Some((Rashi::Simha, 0.0, 20.0)),
        Graha::Chandra => Some((Rashi::Vrishabha, 3.0, 30.0)),
        Graha::Mangal => Some((Rashi::Mesha, 0.0, 12.0)),
        Graha::Buddh => Some((Rashi::Kanya, 15.0, 20.0)),
        Graha::Guru => Some((Rashi::Dhanu, 0.0, 10.0)),
        Graha::Shukra => Some((Rashi::Tula, 0.0, 15.0)),
        Graha::Shani => Some((Rashi::Kumbha, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Dignity of `graha` at a sidereal longitude.
///
/// Precedence: exaltation, debilitation, moolatrikona, own sign. The
/// nodes own no sign.
pub fn dignity(graha: Graha, sidereal_lon: f64) -> Dignity {
    let info = rashi_from_longitude(sidereal_lon);
    let exalt = exaltation_sign(graha);
    if info.rashi == exalt {
        return Dignity::Exalted;
    }
    if info.rashi_index == (exalt.index() + 6) % 12 {
        return Dignity::Debilitated;
    }
    if let Some((sign, from, to)) = moolatrikona(graha) {
        if info.rashi == sign && info.degrees_in_rashi >= from && info.degrees_in_rashi < to {
            return Dignity::Moolatrikona;
        }
    }
    if !matches!(graha, Graha::Rahu | Graha::Ketu) && rashi_lord(info.rashi) == graha {
        return Dignity::OwnSign;
    }
    Dignity::Neutral
}

/// Natural relationship of a graha towards another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Relationship {
    Friend,
    Neutral,
    Enemy,
}

/// Natural friendship table. The nodes follow Saturn-like (Rahu) and
/// Mars-like (Ketu) friendships; any pairing not listed is neutral.
pub const fn natural_relationship(graha: Graha, other: Graha) -> Relationship {
    use Graha::*;
    use Relationship::*;

    match (graha, other) {
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        (Chandra, Surya | Buddh) => Friend,

        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        (Rahu, Shukra | Shani) => Friend,
        (Rahu, Surya | Chandra) => Enemy,

        (Ketu, Mangal | Guru) => Friend,
        (Ketu, Surya | Chandra) => Enemy,

        _ => Neutral,
    }
}

/// Graded sign strength in [0, 1].
///
/// Exaltation 1.0, debilitation 0.0, own sign 0.9, otherwise by the
/// relationship with the sign lord: friend 0.75, neutral 0.5, enemy 0.25.
pub fn dignity_multiplier(graha: Graha, rashi: Rashi) -> f64 {
    let exalt = exaltation_sign(graha);
    if rashi == exalt {
        return 1.0;
    }
    if rashi.index() == (exalt.index() + 6) % 12 {
        return 0.0;
    }
    let lord = rashi_lord(rashi);
    if lord == graha {
        return 0.9;
    }
    match natural_relationship(graha, lord) {
        Relationship::Friend => 0.75,
        Relationship::Neutral => 0.5,
        Relationship::Enemy => 0.25,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_cases() {
        assert_eq!(dignity(Graha::Surya, 10.0), Dignity::Exalted);
        assert_eq!(dignity(Graha::Surya, 190.0), Dignity::Debilitated);
        assert_eq!(dignity(Graha::Surya, 125.0), Dignity::Moolatrikona);
        assert_eq!(dignity(Graha::Surya, 145.0), Dignity::OwnSign);
        assert_eq!(dignity(Graha::Surya, 70.0), Dignity::Neutral);
    }

    #[test]
    fn multiplier_grades() {
        assert_eq!(dignity_multiplier(Graha::Surya, Rashi::Mesha), 1.0);
        assert_eq!(dignity_multiplier(Graha::Surya, Rashi::Tula), 0.0);
        assert_eq!(dignity_multiplier(Graha::Surya, Rashi::Simha), 0.9);
        // Karka is the Moon's: a friend of the Sun.
        assert_eq!(dignity_multiplier(Graha::Surya, Rashi::Karka), 0.75);
        // Mithuna is Mercury's: neutral to the Sun.
        assert_eq!(dignity_multiplier(Graha::Surya, Rashi::Mithuna), 0.5);
        // Makara is Saturn's: an enemy of the Sun.
        assert_eq!(dignity_multiplier(Graha::Surya, Rashi::Makara), 0.25);
    }

    #[test]
    fn multiplier_for_nodes() {
        assert_eq!(dignity_multiplier(Graha::Rahu, Rashi::Vrishabha), 1.0);
        assert_eq!(dignity_multiplier(Graha::Rahu, Rashi::Vrischika), 0.0);
        // Kumbha is Saturn's: a friend of Rahu, never Rahu's own sign.
        assert_eq!(dignity_multiplier(Graha::Rahu, Rashi::Kumbha), 0.75);
        assert_eq!(dignity_multiplier(Graha::Ketu, Rashi::Simha), 0.25);
        assert_eq!(dignity_multiplier(Graha::Ketu, Rashi::Mithuna), 0.5);
    }

    #[test]
    fn moon_has_no_enemies() {
        for &g in crate::graha::ALL_GRAHAS.iter() {
            assert_ne!(natural_relationship(Graha::Chandra, g), Relationship::Enemy);
        }
    }

    #[test]
    fn multiplier_stays_in_unit_range() {
        for &g in crate::graha::ALL_GRAHAS.iter() {
            for &r in crate::rashi::ALL_RASHIS.iter() {
                let m = dignity_multiplier(g, r);
                assert!((0.0..=1.0).contains(&m), "{g:?} in {r:?}: {m}");
            }
        }
    }

    #[test]
    fn nodes_own_nothing() {
        // Aquarius would be "own" for Saturn-like lordship; nodes stay neutral.
        assert_eq!(dignity(Graha::Rahu, 310.0), Dignity::Neutral);
        assert_eq!(dignity(Graha::Ketu, 220.0), Dignity::Exalted);
    }
}
