//! Sidereal chart engine and the classical Vedic tables built on it.
//!
//! This crate provides:
//! - Rashi, nakshatra, pada and house arithmetic on sidereal longitudes
//! - Chart computation against any [`jyotish_core::Ephemeris`]
//! - KP lord chains, significators, ruling planets and life-area readings
//! - Panchang limbs, tarabala, chandrabala and Vimshottari dasha
//!
//! Everything except [`compute_chart`] is pure math and needs no ephemeris.

pub mod bala;
pub mod bhava;
pub mod chart;
pub mod dasha;
pub mod dignity;
pub mod error;
pub mod graha;
pub mod kp;
pub mod nakshatra;
pub mod panchang;
pub mod rashi;
pub mod util;
pub mod vimshottari;

pub use bala::{
    Chandrabala, IshtaKashta, Tara, chandrabala, deep_exaltation_deg, ishta_kashta_phala, tara,
    tarabala_score, ucha_bala,
};
pub use bhava::{
    House, HouseDivision, cusp_house, cusp_houses, whole_sign_house, whole_sign_houses,
};
pub use chart::{BodyPosition, BodyReading, Chart, ChartSettings, ZodiacPlacement, compute_chart};
pub use dasha::{ActiveDasha, DashaLevel, DashaPeriod, active_dasha, antardashas, mahadashas};
pub use dignity::{
    Dignity, Relationship, dignity, dignity_multiplier, exaltation_sign, natural_relationship,
};
pub use error::ChartError;
pub use graha::{ALL_GRAHAS, Graha, Nature, nth_rashi_from, rashi_lord};
pub use kp::{
    AreaReading, AreaStrength, KpChart, LifeArea, LordChain, Remedy, RulingPlanets,
    SignificatorSet, kp_lords, life_area_readings, remedies, resolve_lord_chain,
    resolve_significators, ruling_planets,
};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use panchang::{
    Karana, KaranaInfo, Paksha, Panchang, TithiGroup, TithiInfo, VaarInfo, YogaInfo,
    is_auspicious_tithi, karana_from_longitudes, panchang, tithi_from_longitudes, vaar_from_weekday,
    vaar_lord, yoga_from_longitudes,
};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, dms_to_deg, format_dms, rashi_from_longitude,
};
pub use util::{forward_arc, normalize_360};
pub use vimshottari::{VIMSHOTTARI_SEQUENCE, nakshatra_lord};

pub use jyotish_core::{AyanamshaSystem, GeoLocation, HouseSystem, NodeMode};
