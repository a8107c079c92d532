//! Component score formulas.
//!
//! Each function is pure. [`compute_components`] guards every value: a
//! non-finite or out-of-range result is logged and replaced by the neutral
//! value 0 so one broken component cannot invalidate the day.

use jyotish_base::{
    ActiveDasha, Chart, Graha, Nature, Panchang, chandrabala, is_auspicious_tithi, tarabala_score,
    whole_sign_house,
};
use tracing::warn;

use crate::events::{DetectedEvent, EventCategory};
use crate::natal::NatalContext;
use crate::scoring::{ComponentKind, ComponentScores};

pub const TRANSIT_BENEFICS: [Graha; 3] = [Graha::Guru, Graha::Shukra, Graha::Buddh];
pub const TRANSIT_MALEFICS: [Graha; 4] = [Graha::Shani, Graha::Mangal, Graha::Rahu, Graha::Ketu];

/// 1-based nakshatra numbers scored as auspicious.
pub const AUSPICIOUS_NAKSHATRAS: [u8; 13] = [1, 4, 5, 7, 8, 13, 14, 15, 17, 22, 23, 24, 27];

/// Yoga numbers scored as auspicious.
pub const AUSPICIOUS_YOGAS: [u8; 17] = [2, 3, 4, 5, 7, 11, 12, 14, 15, 16, 20, 21, 22, 23, 24, 25, 26];

const fn is_kendra(house: u8) -> bool {
    matches!(house, 1 | 4 | 7 | 10)
}

const fn is_trikona(house: u8) -> bool {
    matches!(house, 5 | 9)
}

const fn is_upachaya(house: u8) -> bool {
    matches!(house, 3 | 6 | 10 | 11)
}

/// Natural nature of the running mahadasha (±40/−20) and antardasha
/// lords (+20/−10). No active dasha scores 0.
pub fn dasha_score(active: Option<&ActiveDasha>) -> f64 {
    let Some(active) = active else {
        return 0.0;
    };
    let maha = match active.mahadasha.lord.nature() {
        Nature::Benefic => 40.0,
        Nature::Malefic => -20.0,
    };
    let antar = match active.antardasha.lord.nature() {
        Nature::Benefic => 20.0,
        Nature::Malefic => -10.0,
    };
    f64::clamp(maha + antar, -100.0, 100.0)
}

/// Transit score from `(graha, rashi index)` placements, houses counted
/// from the natal Moon sign.
pub fn transit_score_from<I>(natal_moon_rashi: u8, placements: I) -> f64
where
    I: IntoIterator<Item = (Graha, u8)>,
{
    let mut score = 0.0;
    for (graha, rashi) in placements {
        let house = whole_sign_house(rashi, natal_moon_rashi);
        if TRANSIT_BENEFICS.contains(&graha) {
            if is_kendra(house) {
                score += 15.0;
            } else if is_trikona(house) {
                score += 10.0;
            }
        } else if TRANSIT_MALEFICS.contains(&graha) {
            // House 10 is both upachaya and kendra; upachaya wins.
            if is_upachaya(house) {
                score += 10.0;
            } else if is_kendra(house) {
                score -= 15.0;
            }
        }
    }
    f64::clamp(score, -100.0, 100.0)
}

/// Transit score of a chart's available bodies. Missing bodies add nothing.
pub fn transit_score(natal_moon_rashi: u8, chart: &Chart) -> f64 {
    transit_score_from(
        natal_moon_rashi,
        chart
            .positions()
            .map(|p| (p.graha, p.placement.rashi.rashi_index)),
    )
}

pub fn panchang_score(p: &Panchang) -> f64 {
    let mut score = if is_auspicious_tithi(p.tithi.number) {
        30.0
    } else {
        -15.0
    };
    score += if p.karana.karana.is_auspicious() {
        20.0
    } else {
        -10.0
    };
    if AUSPICIOUS_NAKSHATRAS.contains(&p.nakshatra.nakshatra.number()) {
        score += 25.0;
    }
    if AUSPICIOUS_YOGAS.contains(&p.yoga.number) {
        score += 25.0;
    }
    f64::clamp(score, -100.0, 100.0)
}

fn occurring_strength(events: &[DetectedEvent], category: EventCategory) -> f64 {
    events
        .iter()
        .filter(|e| e.occurring && e.category == category)
        .map(|e| e.strength)
        .sum::<f64>()
        .min(100.0)
}

/// Σ strength of occurring inauspicious events, capped at 100.
pub fn ghataka_penalty(events: &[DetectedEvent]) -> f64 {
    occurring_strength(events, EventCategory::Inauspicious)
}

/// Σ strength of occurring auspicious events, capped at 100.
pub fn muhurta_bonus(events: &[DetectedEvent]) -> f64 {
    occurring_strength(events, EventCategory::Auspicious)
}

fn guarded(kind: ComponentKind, value: f64, min: f64) -> f64 {
    if value.is_finite() && (min..=100.0).contains(&value) {
        value
    } else {
        warn!(component = kind.name(), value, "component out of range, using neutral value");
        0.0
    }
}

/// All seven components for one day.
pub fn compute_components(
    natal: &NatalContext,
    transit_chart: &Chart,
    panchang: &Panchang,
    dasha: Option<&ActiveDasha>,
    events: &[DetectedEvent],
) -> ComponentScores {
    let natal_moon_rashi = natal.moon_rashi.index();
    let transit_moon = panchang.nakshatra.nakshatra_index;
    let transit_moon_rashi = transit_chart
        .body(Graha::Chandra)
        .map(|m| m.placement.rashi.rashi_index);

    let tarabala = tarabala_score(natal.moon_nakshatra.index(), transit_moon);
    let chandrabala = match transit_moon_rashi {
        Some(r) => chandrabala(natal_moon_rashi, r).score,
        None => {
            warn!("transit Moon unavailable, chandrabala neutral");
            0.0
        }
    };

    ComponentScores {
        dasha: guarded(ComponentKind::Dasha, dasha_score(dasha), -100.0),
        transit: guarded(
            ComponentKind::Transit,
            transit_score(natal_moon_rashi, transit_chart),
            -100.0,
        ),
        tarabala: guarded(ComponentKind::Tarabala, tarabala, -100.0),
        chandrabala: guarded(ComponentKind::Chandrabala, chandrabala, -100.0),
        panchang: guarded(ComponentKind::Panchang, panchang_score(panchang), -100.0),
        ghataka_penalty: guarded(ComponentKind::Ghataka, ghataka_penalty(events), 0.0),
        muhurta_bonus: guarded(ComponentKind::Muhurta, muhurta_bonus(events), 0.0),
    }
}
