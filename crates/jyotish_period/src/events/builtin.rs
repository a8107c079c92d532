//! Detectors shipped with the default registry.

use jyotish_base::{Karana, Nakshatra, Rashi, TithiGroup};

use super::{DetectedEvent, EventCategory, EventContext, EventDetector};
use crate::error::EventError;

const SUNDAY: u8 = 0;
const THURSDAY: u8 = 4;

// ---------------------------------------------------------------------------
// Ghataka Chakra
// ---------------------------------------------------------------------------

/// Strength added per matching ghataka factor.
pub const GHATAKA_STRENGTH_PER_MATCH: f64 = 20.0;

/// Ghataka tithi group, weekday and nakshatra for a natal Moon rashi.
pub const fn ghataka_factors(natal_moon: Rashi) -> (TithiGroup, u8, Nakshatra) {
    match natal_moon {
        Rashi::Mesha => (TithiGroup::Nanda, 0, Nakshatra::Magha),
        Rashi::Vrishabha => (TithiGroup::Purna, 6, Nakshatra::Hasta),
        Rashi::Mithuna => (TithiGroup::Bhadra, 1, Nakshatra::Swati),
        Rashi::Karka => (TithiGroup::Bhadra, 3, Nakshatra::Anuradha),
        Rashi::Simha => (TithiGroup::Jaya, 6, Nakshatra::Mula),
        Rashi::Kanya => (TithiGroup::Purna, 6, Nakshatra::Shravana),
        Rashi::Tula => (TithiGroup::Rikta, 4, Nakshatra::Shatabhisha),
        Rashi::Vrischika => (TithiGroup::Nanda, 5, Nakshatra::Revati),
        Rashi::Dhanu => (TithiGroup::Jaya, 5, Nakshatra::Bharani),
        Rashi::Makara => (TithiGroup::Rikta, 2, Nakshatra::Rohini),
        Rashi::Kumbha => (TithiGroup::Jaya, 4, Nakshatra::Ardra),
        Rashi::Meena => (TithiGroup::Purna, 5, Nakshatra::Ashlesha),
    }
}

/// Number of the day's tithi group, weekday and nakshatra that match the
/// natal Moon's ghataka factors.
pub fn ghataka_matches(
    natal_moon: Rashi,
    group: TithiGroup,
    weekday: u8,
    nakshatra: Nakshatra,
) -> u8 {
    let (g, w, n) = ghataka_factors(natal_moon);
    u8::from(g == group) + u8::from(w == weekday) + u8::from(n == nakshatra)
}

pub struct GhatakaChakraDetector;

impl EventDetector for GhatakaChakraDetector {
    fn name(&self) -> &str {
        "Ghataka Chakra"
    }

    fn detect(&self, ctx: &EventContext<'_>) -> Result<DetectedEvent, EventError> {
        let p = ctx.panchang;
        let matches = ghataka_matches(
            ctx.natal.moon_rashi,
            p.tithi.group,
            p.vaar.weekday,
            p.nakshatra.nakshatra,
        );
        Ok(DetectedEvent::new(
            self.name(),
            EventCategory::Inauspicious,
            matches > 0,
            f64::from(matches) * GHATAKA_STRENGTH_PER_MATCH,
        )
        .with_description(format!("{matches} of 3 ghataka factors for the natal Moon sign")))
    }
}

// ---------------------------------------------------------------------------
// Panchang doshas
// ---------------------------------------------------------------------------

pub struct VishtiKaranaDetector;

impl EventDetector for VishtiKaranaDetector {
    fn name(&self) -> &str {
        "Vishti Karana"
    }

    fn detect(&self, ctx: &EventContext<'_>) -> Result<DetectedEvent, EventError> {
        let occurring = ctx.panchang.karana.karana == Karana::Vishti;
        Ok(
            DetectedEvent::new(self.name(), EventCategory::Inauspicious, occurring, 30.0)
                .with_description("Bhadra karana; avoid new undertakings"),
        )
    }
}

pub struct RiktaTithiDetector;

impl EventDetector for RiktaTithiDetector {
    fn name(&self) -> &str {
        "Rikta Tithi"
    }

    fn detect(&self, ctx: &EventContext<'_>) -> Result<DetectedEvent, EventError> {
        let occurring = ctx.panchang.tithi.group == TithiGroup::Rikta;
        Ok(
            DetectedEvent::new(self.name(), EventCategory::Inauspicious, occurring, 20.0)
                .with_description("Chaturthi, Navami or Chaturdashi"),
        )
    }
}

pub struct AmavasyaDetector;

impl EventDetector for AmavasyaDetector {
    fn name(&self) -> &str {
        "Amavasya"
    }

    fn detect(&self, ctx: &EventContext<'_>) -> Result<DetectedEvent, EventError> {
        let occurring = ctx.panchang.tithi.number == 30;
        Ok(
            DetectedEvent::new(self.name(), EventCategory::Inauspicious, occurring, 25.0)
                .with_description("New Moon"),
        )
    }
}

// ---------------------------------------------------------------------------
// Auspicious yogas
// ---------------------------------------------------------------------------

/// Nakshatra forming Amrita Siddhi yoga with each weekday (Sunday first).
pub const AMRITA_SIDDHI: [Nakshatra; 7] = [
    Nakshatra::Hasta,
    Nakshatra::Shravana,
    Nakshatra::Ashwini,
    Nakshatra::Anuradha,
    Nakshatra::Pushya,
    Nakshatra::Revati,
    Nakshatra::Rohini,
];

pub struct AmritaSiddhiDetector;

impl EventDetector for AmritaSiddhiDetector {
    fn name(&self) -> &str {
        "Amrita Siddhi Yoga"
    }

    fn detect(&self, ctx: &EventContext<'_>) -> Result<DetectedEvent, EventError> {
        let weekday = ctx.panchang.vaar.weekday;
        let wanted = AMRITA_SIDDHI
            .get(weekday as usize)
            .ok_or_else(|| EventError {
                name: self.name().to_string(),
                reason: format!("weekday {weekday} out of range"),
            })?;
        let occurring = ctx.panchang.nakshatra.nakshatra == *wanted;
        Ok(
            DetectedEvent::new(self.name(), EventCategory::Auspicious, occurring, 40.0)
                .with_description(format!("{} on {}", wanted.name(), ctx.panchang.vaar.name)),
        )
    }
}

pub struct GuruPushyaDetector;

impl EventDetector for GuruPushyaDetector {
    fn name(&self) -> &str {
        "Guru Pushya Yoga"
    }

    fn detect(&self, ctx: &EventContext<'_>) -> Result<DetectedEvent, EventError> {
        let occurring = ctx.panchang.vaar.weekday == THURSDAY
            && ctx.panchang.nakshatra.nakshatra == Nakshatra::Pushya;
        Ok(
            DetectedEvent::new(self.name(), EventCategory::Auspicious, occurring, 50.0)
                .with_description("Pushya nakshatra on a Thursday"),
        )
    }
}

pub struct RaviPushyaDetector;

impl EventDetector for RaviPushyaDetector {
    fn name(&self) -> &str {
        "Ravi Pushya Yoga"
    }

    fn detect(&self, ctx: &EventContext<'_>) -> Result<DetectedEvent, EventError> {
        let occurring = ctx.panchang.vaar.weekday == SUNDAY
            && ctx.panchang.nakshatra.nakshatra == Nakshatra::Pushya;
        Ok(
            DetectedEvent::new(self.name(), EventCategory::Auspicious, occurring, 40.0)
                .with_description("Pushya nakshatra on a Sunday"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghataka_counts_each_factor() {
        assert_eq!(
            ghataka_matches(Rashi::Mesha, TithiGroup::Nanda, 0, Nakshatra::Magha),
            3
        );
        assert_eq!(
            ghataka_matches(Rashi::Mesha, TithiGroup::Nanda, 1, Nakshatra::Hasta),
            1
        );
        assert_eq!(
            ghataka_matches(Rashi::Tula, TithiGroup::Purna, 0, Nakshatra::Magha),
            0
        );
    }

    #[test]
    fn every_rashi_has_factors() {
        for &r in Rashi::all() {
            let (_, weekday, _) = ghataka_factors(r);
            assert!(weekday < 7);
        }
    }

    #[test]
    fn amrita_siddhi_thursday_is_pushya() {
        assert_eq!(AMRITA_SIDDHI[4], Nakshatra::Pushya);
    }

    #[test]
    fn non_occurring_event_has_no_strength() {
        let e = DetectedEvent::new("x", EventCategory::Auspicious, false, 40.0);
        assert_eq!(e.strength, 0.0);
    }
}
