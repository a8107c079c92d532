//! Quadrant house systems understood by ephemeris adapters.

use serde::{Deserialize, Serialize};

/// House division requested from [`crate::Ephemeris::house_cusps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    /// Placidus semi-arc division; also the KP convention.
    #[default]
    Placidus,
    Koch,
    /// Porphyry (Sripati): trisected quadrants.
    Porphyry,
    Equal,
    Regiomontanus,
    Campanus,
}

pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 6] = [
    HouseSystem::Placidus,
    HouseSystem::Koch,
    HouseSystem::Porphyry,
    HouseSystem::Equal,
    HouseSystem::Regiomontanus,
    HouseSystem::Campanus,
];

impl HouseSystem {
    /// Single-letter system code used by common ephemeris libraries.
    pub const fn code(self) -> char {
        match self {
            Self::Placidus => 'P',
            Self::Koch => 'K',
            Self::Porphyry => 'O',
            Self::Equal => 'E',
            Self::Regiomontanus => 'R',
            Self::Campanus => 'C',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'P' => Some(Self::Placidus),
            'K' => Some(Self::Koch),
            'O' => Some(Self::Porphyry),
            'E' => Some(Self::Equal),
            'R' => Some(Self::Regiomontanus),
            'C' => Some(Self::Campanus),
            _ => None,
        }
    }

    /// Whether the system degenerates near the polar circles.
    pub const fn latitude_dependent(self) -> bool {
        matches!(self, Self::Placidus | Self::Koch)
    }

    pub const fn all() -> &'static [HouseSystem] {
        &ALL_HOUSE_SYSTEMS
    }
}
