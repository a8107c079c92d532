//! Exercise the default trait methods through a trivial adapter.

use std::sync::Arc;

use jyotish_core::{
    AyanamshaSystem, Body, EclipticState, Ephemeris, EphemerisError, GeoLocation, HouseSystem,
    Instant, QueryFlags,
};

struct Fixed;

impl Ephemeris for Fixed {
    fn position(
        &self,
        _instant: Instant,
        body: Body,
        _flags: QueryFlags,
    ) -> Result<EclipticState, EphemerisError> {
        if body == Body::Rahu {
            return Err(EphemerisError::BodyUnavailable {
                body,
                reason: "no node data".into(),
            });
        }
        Ok(EclipticState {
            longitude_deg: f64::from(body.code()) * 10.0,
            latitude_deg: 0.0,
            distance_au: 1.0,
            speed_longitude_deg_per_day: 1.0,
            speed_latitude_deg_per_day: 0.0,
            speed_distance_au_per_day: 0.0,
        })
    }

    fn house_cusps(
        &self,
        _instant: Instant,
        _location: GeoLocation,
        _system: HouseSystem,
    ) -> Result<[f64; 12], EphemerisError> {
        Ok(std::array::from_fn(|i| i as f64 * 30.0))
    }
}

#[test]
fn default_ayanamsa_uses_precession_model() {
    let e = Fixed;
    let a = e
        .ayanamsa_deg(Instant::from_jd_ut(jyotish_time::J2000_JD), AyanamshaSystem::Lahiri)
        .unwrap();
    assert!((a - 23.853).abs() < 1e-12);
}

#[test]
fn arc_forwards_every_method() {
    let shared: Arc<dyn Ephemeris> = Arc::new(Fixed);
    let i = Instant::from_jd_ut(2_460_000.5);
    let moon = shared.position(i, Body::Moon, QueryFlags::default()).unwrap();
    assert!((moon.longitude_deg - 10.0).abs() < 1e-12);
    assert!(shared.position(i, Body::Rahu, QueryFlags::default()).is_err());
    let cusps = shared
        .house_cusps(i, GeoLocation::new(12.97, 77.59).unwrap(), HouseSystem::Placidus)
        .unwrap();
    assert_eq!(cusps[3], 90.0);
}
