//! Krishnamurti Paddhati (KP): lord chains, significators, ruling planets
//! and house-combination readings.

pub mod areas;
pub mod lords;
pub mod ruling;
pub mod significators;

pub use areas::{
    ALL_LIFE_AREAS, AreaReading, AreaStrength, LifeArea, Remedy, RemedyData, life_area_readings,
    remedies, remedy_data,
};
pub use lords::{LordChain, SubArc, kp_lords, resolve_lord_chain, subdivide};
pub use ruling::{RulingPlanets, ruling_planets};
pub use significators::{KpChart, KpCusp, KpPlanet, SignificatorSet, resolve_significators};
