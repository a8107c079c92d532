//! House-combination readings for life areas, and remedies for planets in
//! the dusthana houses (6, 8, 12).

use serde::Serialize;

use crate::graha::Graha;

use super::significators::KpChart;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LifeArea {
    Education,
    Marriage,
    Career,
    Money,
    Property,
    Health,
    Travel,
    Litigation,
}

pub const ALL_LIFE_AREAS: [LifeArea; 8] = [
    LifeArea::Education,
    LifeArea::Marriage,
    LifeArea::Career,
    LifeArea::Money,
    LifeArea::Property,
    LifeArea::Health,
    LifeArea::Travel,
    LifeArea::Litigation,
];

impl LifeArea {
    pub const fn favorable_houses(self) -> &'static [u8] {
        match self {
            Self::Education => &[2, 3, 4, 5, 9, 10, 11],
            Self::Marriage => &[2, 7, 9, 11],
            Self::Career | Self::Money => &[2, 6, 7, 10, 11],
            Self::Property => &[4, 8, 11, 12],
            Self::Health => &[5, 9, 11],
            Self::Travel => &[1, 3, 7, 9, 11, 12],
            Self::Litigation => &[1, 3, 4, 6, 9, 10, 11],
        }
    }

    pub const fn unfavorable_houses(self) -> &'static [u8] {
        match self {
            Self::Education => &[3, 5, 6, 8, 12],
            Self::Marriage => &[1, 5, 6, 10, 12],
            Self::Career | Self::Money => &[5, 8, 12],
            Self::Property => &[3, 5, 10],
            Self::Health => &[4, 6, 8, 10, 12],
            Self::Travel => &[],
            Self::Litigation => &[1, 6, 8, 12],
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Education => "Academic potential and competitive exam success.",
            Self::Marriage => "Marital harmony and timing of union.",
            Self::Career => "Professional growth, promotion, and stability.",
            Self::Money => "Financial gains, savings, and investments.",
            Self::Property => "Real estate, vehicle purchase, and inheritance.",
            Self::Health => "Vitality, recovery, and medical predispositions.",
            Self::Travel => "Short/long journeys and foreign opportunities.",
            Self::Litigation => "Legal battles, disputes, and recovery.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AreaStrength {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaReading {
    pub area: LifeArea,
    /// Planets occupying a favorable house for the area.
    pub favorable_hits: u8,
    pub strength: AreaStrength,
    pub description: &'static str,
}

/// Count favorable occupancies per area: ≥4 High, ≥2 Medium, else Low.
pub fn life_area_readings(kp: &KpChart) -> Vec<AreaReading> {
    ALL_LIFE_AREAS
        .iter()
        .map(|&area| {
            let favorable_hits = kp
                .planets
                .iter()
                .filter(|p| area.favorable_houses().contains(&p.house))
                .count() as u8;
            let strength = match favorable_hits {
                4.. => AreaStrength::High,
                2..=3 => AreaStrength::Medium,
                _ => AreaStrength::Low,
            };
            AreaReading {
                area,
                favorable_hits,
                strength,
                description: area.description(),
            }
        })
        .collect()
}

/// Traditional propitiation for one graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemedyData {
    pub mantra: &'static str,
    pub stone: &'static str,
    pub donation: &'static str,
}

pub const fn remedy_data(graha: Graha) -> RemedyData {
    let (mantra, stone, donation) = match graha {
        Graha::Surya => ("Om Hraam Hreem Hraum Saha Suryaya Namaha", "Ruby", "Wheat"),
        Graha::Chandra => ("Om Shraam Shreem Shraum Saha Chandraya Namaha", "Pearl", "Rice"),
        Graha::Mangal => ("Om Kraam Kreem Kraum Saha Bhaumaya Namaha", "Red Coral", "Toor dal"),
        Graha::Buddh => ("Om Braam Breem Braum Saha Budhaya Namaha", "Emerald", "Green gram"),
        Graha::Guru => ("Om Graam Greem Graum Saha Gurave Namaha", "Yellow Sapphire", "Bengal gram"),
        Graha::Shukra => ("Om Draam Dreem Draum Saha Shukraya Namaha", "Diamond", "White beans"),
        Graha::Shani => ("Om Praam Preem Praum Saha Shanaye Namaha", "Blue Sapphire", "Black sesame"),
        Graha::Rahu => ("Om Bhraam Bhreem Bhraum Saha Rahave Namaha", "Hessonite", "Black gram"),
        Graha::Ketu => ("Om Sraam Sreem Sraum Saha Ketave Namaha", "Cat's Eye", "Horse gram"),
    };
    RemedyData {
        mantra,
        stone,
        donation,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Remedy {
    pub graha: Graha,
    pub house: u8,
    #[serde(flatten)]
    pub data: RemedyData,
}

/// Remedies for every planet occupying house 6, 8 or 12.
pub fn remedies(kp: &KpChart) -> Vec<Remedy> {
    kp.planets
        .iter()
        .filter(|p| matches!(p.house, 6 | 8 | 12))
        .map(|p| Remedy {
            graha: p.graha,
            house: p.house,
            data: remedy_data(p.graha),
        })
        .collect()
}
