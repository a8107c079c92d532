//! Property tests for longitude arithmetic and node placement.

use jyotish_base::{
    ChartSettings, Graha, compute_chart, kp_lords, nakshatra_from_longitude, nakshatra_lord,
    normalize_360, rashi_from_longitude, rashi_lord, resolve_lord_chain, tarabala_score,
    whole_sign_house,
};
use jyotish_core::{
    AyanamshaSystem, Body, EclipticState, Ephemeris, EphemerisError, GeoLocation, HouseSystem,
    Instant, QueryFlags,
};
use proptest::prelude::*;

/// Every body at one tropical longitude, with Rahu at its own.
struct Nodes {
    rahu: f64,
}

impl Ephemeris for Nodes {
    fn position(
        &self,
        _instant: Instant,
        body: Body,
        _flags: QueryFlags,
    ) -> Result<EclipticState, EphemerisError> {
        let longitude_deg = if body == Body::Rahu { self.rahu } else { 45.0 };
        Ok(EclipticState {
            longitude_deg,
            latitude_deg: 0.0,
            distance_au: 1.0,
            speed_longitude_deg_per_day: -0.05,
            speed_latitude_deg_per_day: 0.0,
            speed_distance_au_per_day: 0.0,
        })
    }

    fn ayanamsa_deg(
        &self,
        _instant: Instant,
        _system: AyanamshaSystem,
    ) -> Result<f64, EphemerisError> {
        Ok(24.0)
    }

    fn house_cusps(
        &self,
        _instant: Instant,
        _location: GeoLocation,
        _system: HouseSystem,
    ) -> Result<[f64; 12], EphemerisError> {
        Ok(std::array::from_fn(|i| 30.0 * i as f64))
    }
}

fn arc_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

proptest! {
    #[test]
    fn normalize_is_in_range(lon in -1.0e6f64..1.0e6) {
        let n = normalize_360(lon);
        prop_assert!((0.0..360.0).contains(&n));
    }

    #[test]
    fn sign_and_star_in_range(lon in -720.0f64..720.0) {
        let r = rashi_from_longitude(lon);
        prop_assert!(r.rashi_index < 12);
        prop_assert!((0.0..30.0).contains(&r.degrees_in_rashi));
        let n = nakshatra_from_longitude(lon);
        prop_assert!(n.nakshatra_index < 27);
        prop_assert!((1..=4).contains(&n.pada));
    }

    #[test]
    fn whole_sign_house_in_range(body in 0u8..12, asc in 0u8..12) {
        let h = whole_sign_house(body, asc);
        prop_assert!((1..=12).contains(&h));
        prop_assert_eq!(whole_sign_house(asc, asc), 1);
    }

    #[test]
    fn normalize_ignores_whole_turns(lon in -1.0e4f64..1.0e4, k in -50i32..50) {
        let shifted = normalize_360(lon + 360.0 * f64::from(k));
        prop_assert!(arc_distance(shifted, normalize_360(lon)) < 1e-8);
    }

    #[test]
    fn lord_chain_agrees_with_sign_and_star(lon in -720.0f64..720.0) {
        let c = resolve_lord_chain(lon);
        prop_assert_eq!(c.sign_lord, rashi_lord(rashi_from_longitude(lon).rashi));
        let star = nakshatra_from_longitude(lon);
        prop_assert_eq!(c.star_lord, nakshatra_lord(star.nakshatra_index));
        prop_assert_eq!(c.star_lord, star.lord);
        let deep = kp_lords(lon, 5);
        prop_assert_eq!(&deep[..4], &[c.sign_lord, c.star_lord, c.sub_lord, c.sub_sub_lord][..]);
    }

    #[test]
    fn ketu_opposes_rahu(rahu in -360.0f64..720.0) {
        let chart = compute_chart(
            &Nodes { rahu },
            Instant::from_jd_ut(2_460_000.5),
            GeoLocation::new(0.0, 0.0).unwrap(),
            ChartSettings::default(),
        )
        .unwrap();
        let r = chart.body(Graha::Rahu).unwrap().longitude();
        let k = chart.body(Graha::Ketu).unwrap().longitude();
        prop_assert!((0.0..360.0).contains(&k));
        prop_assert!(arc_distance(r, normalize_360(rahu - 24.0)) < 1e-9);
        prop_assert!(arc_distance(k, normalize_360(r + 180.0)) < 1e-9);
    }

    #[test]
    fn tarabala_bounded(b in 0u8..27, c in 0u8..27) {
        let s = tarabala_score(b, c);
        prop_assert!((-50.0..=50.0).contains(&s));
    }
}
