//! KP chart view and per-house significators (levels A–D).

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::bhava::HouseDivision;
use crate::chart::Chart;
use crate::graha::Graha;
use crate::rashi::format_dms;

use super::lords::{LordChain, resolve_lord_chain};

/// A house cusp with its lord chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpCusp {
    pub house: u8,
    pub longitude_deg: f64,
    pub formatted: String,
    pub lords: LordChain,
}

/// A planet with its lord chain and occupied house.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpPlanet {
    pub graha: Graha,
    pub longitude_deg: f64,
    pub formatted: String,
    pub retrograde: bool,
    pub house: u8,
    pub lords: LordChain,
}

/// Lord chains of a chart under one house division.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpChart {
    pub division: HouseDivision,
    pub cusps: Vec<KpCusp>,
    /// Only grahas the ephemeris could serve.
    pub planets: Vec<KpPlanet>,
}

impl KpChart {
    /// Build from a chart; occupancy follows `division`.
    pub fn from_chart(chart: &Chart, division: HouseDivision) -> Self {
        let cusps = chart
            .houses(division)
            .iter()
            .map(|h| KpCusp {
                house: h.number,
                longitude_deg: h.start_deg,
                formatted: format_dms(h.start_deg),
                lords: resolve_lord_chain(h.start_deg),
            })
            .collect();
        let planets = chart
            .positions()
            .map(|p| KpPlanet {
                graha: p.graha,
                longitude_deg: p.longitude(),
                formatted: format_dms(p.longitude()),
                retrograde: p.retrograde,
                house: p.house(division),
                lords: resolve_lord_chain(p.longitude()),
            })
            .collect();
        Self {
            division,
            cusps,
            planets,
        }
    }

    pub fn planet(&self, graha: Graha) -> Option<&KpPlanet> {
        self.planets.iter().find(|p| p.graha == graha)
    }
}

/// Significators of one house. All levels are deduplicated sets; `level_d`
/// always holds exactly the cusp sign lord.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SignificatorSet {
    /// Planets in the star of a level-B occupant.
    pub level_a: BTreeSet<Graha>,
    /// Occupants of the house.
    pub level_b: BTreeSet<Graha>,
    /// Planets in the star of the house's sign lord.
    pub level_c: BTreeSet<Graha>,
    /// Sign lord of the house's cusp.
    pub level_d: BTreeSet<Graha>,
}

/// Per-house significators, keyed by house number 1..=12.
pub fn resolve_significators(kp: &KpChart) -> BTreeMap<u8, SignificatorSet> {
    kp.cusps
        .iter()
        .map(|cusp| {
            let owner = cusp.lords.sign_lord;
            let level_b: BTreeSet<Graha> = kp
                .planets
                .iter()
                .filter(|p| p.house == cusp.house)
                .map(|p| p.graha)
                .collect();
            let level_a = kp
                .planets
                .iter()
                .filter(|p| level_b.contains(&p.lords.star_lord))
                .map(|p| p.graha)
                .collect();
            let level_c = kp
                .planets
                .iter()
                .filter(|p| p.lords.star_lord == owner)
                .map(|p| p.graha)
                .collect();
            let set = SignificatorSet {
                level_a,
                level_b,
                level_c,
                level_d: BTreeSet::from([owner]),
            };
            (cusp.house, set)
        })
        .collect()
}
