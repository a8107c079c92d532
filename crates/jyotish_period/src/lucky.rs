//! Lucky factors and rule-based guidance for a day.

use jyotish_base::Graha;
use serde::Serialize;

use crate::scoring::ComponentScores;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckyFactors {
    pub color: &'static str,
    pub direction: &'static str,
    pub gem: &'static str,
    pub mantra: &'static str,
}

/// Lucky factors of a weekday lord. Only the seven day lords have their
/// own entry; the nodes fall back to the Sun's.
pub const fn lucky_factors(day_lord: Graha) -> LuckyFactors {
    let (color, direction, gem, mantra) = match day_lord {
        Graha::Chandra => ("White, Silver", "North-West", "Pearl", "Om Chandraya Namaha"),
        Graha::Mangal => ("Red", "South", "Red Coral", "Om Angarakaya Namaha"),
        Graha::Buddh => ("Green", "North", "Emerald", "Om Budhaya Namaha"),
        Graha::Guru => ("Yellow", "North-East", "Yellow Sapphire", "Om Gurave Namaha"),
        Graha::Shukra => ("White, Pink", "South-East", "Diamond", "Om Shukraya Namaha"),
        Graha::Shani => ("Blue, Black", "West", "Blue Sapphire", "Om Shanishcharaya Namaha"),
        Graha::Surya | Graha::Rahu | Graha::Ketu => {
            ("Gold, Orange", "East", "Ruby", "Om Suryaya Namaha")
        }
    };
    LuckyFactors {
        color,
        direction,
        gem,
        mantra,
    }
}

/// Influences, best areas and caution areas read off the components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guidance {
    /// At most three.
    pub influences: Vec<String>,
    pub best: String,
    pub caution: String,
}

pub fn guidance(scores: &ComponentScores, day_lord: Graha) -> Guidance {
    let mut influences = Vec::new();
    if scores.dasha > 20.0 {
        influences.push(format!("{} Dasha", day_lord.english_name()));
    }
    if scores.transit > 20.0 {
        influences.push("Favorable Transits".to_string());
    }
    if scores.tarabala > 20.0 {
        influences.push("Stable Moon".to_string());
    }
    if scores.panchang > 20.0 {
        influences.push("Auspicious Tithi".to_string());
    }
    influences.truncate(3);

    let mut best = Vec::new();
    if scores.transit > 15.0 {
        best.push("Social & Travel");
    }
    if scores.dasha > 15.0 {
        best.push("Career & Logic");
    }
    if scores.panchang > 15.0 {
        best.push("Ceremonies");
    }

    let mut caution = Vec::new();
    if scores.transit < -15.0 {
        caution.push("Contracts");
    }
    if scores.panchang < -15.0 {
        caution.push("Fast-paced Work");
    }

    Guidance {
        influences,
        best: if best.is_empty() {
            "Routine Activities".to_string()
        } else {
            best.join(", ")
        },
        caution: if caution.is_empty() {
            "Extreme Risks".to_string()
        } else {
            caution.join(", ")
        },
    }
}
