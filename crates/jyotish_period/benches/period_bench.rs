use std::sync::Arc;

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyotish_config::JyotishConfig;
use jyotish_core::{
    AyanamshaSystem, Body, EclipticState, Ephemeris, EphemerisError, GeoLocation, HouseSystem,
    Instant, QueryFlags,
};
use jyotish_period::{BirthDetails, ComponentScores, DayRecord, PeriodOrchestrator, ScoringEngine};

struct Drift;

impl Ephemeris for Drift {
    fn position(
        &self,
        instant: Instant,
        body: Body,
        _flags: QueryFlags,
    ) -> Result<EclipticState, EphemerisError> {
        let rate = match body {
            Body::Sun => 0.9856,
            Body::Moon => 13.1764,
            Body::Mars => 0.524,
            Body::Mercury => 4.0923,
            Body::Jupiter => 0.0831,
            Body::Venus => 1.6021,
            Body::Saturn => 0.0335,
            Body::Rahu => -0.0530,
        };
        Ok(EclipticState {
            longitude_deg: (rate * (instant.jd_ut() - 2_451_545.0)).rem_euclid(360.0),
            latitude_deg: 0.0,
            distance_au: 1.0,
            speed_longitude_deg_per_day: rate,
            speed_latitude_deg_per_day: 0.0,
            speed_distance_au_per_day: 0.0,
        })
    }

    fn ayanamsa_deg(&self, _: Instant, _: AyanamshaSystem) -> Result<f64, EphemerisError> {
        Ok(24.0)
    }

    fn house_cusps(
        &self,
        instant: Instant,
        _: GeoLocation,
        _: HouseSystem,
    ) -> Result<[f64; 12], EphemerisError> {
        let asc = (360.9856 * instant.jd_ut()).rem_euclid(360.0);
        Ok(std::array::from_fn(|i| asc + 30.0 * i as f64))
    }
}

fn orchestrator() -> PeriodOrchestrator {
    let birth = BirthDetails {
        date: "1990-08-15".into(),
        time: "10:30".into(),
        timezone: "Asia/Kolkata".into(),
        latitude: 28.61,
        longitude: 77.21,
    };
    PeriodOrchestrator::from_config(Arc::new(Drift), &birth, &JyotishConfig::default()).unwrap()
}

fn scoring_bench(c: &mut Criterion) {
    let engine = ScoringEngine::default();
    let scores = ComponentScores {
        dasha: 40.0,
        transit: 15.0,
        tarabala: 40.0,
        chandrabala: 30.0,
        panchang: 55.0,
        ghataka_penalty: 20.0,
        muhurta_bonus: 40.0,
    };
    c.bench_function("score_day", |b| b.iter(|| engine.score_day(black_box(&scores))));
}

fn period_bench(c: &mut Criterion) {
    let orch = orchestrator();
    let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
    let runtime = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("period");
    group.bench_function("single_day", |b| {
        b.iter(|| DayRecord::from_outcome(date, orch.pipeline().process(black_box(date))))
    });
    group.bench_function("month_blocking", |b| {
        b.iter(|| orch.analyze_range_blocking(black_box(date), date + chrono::Days::new(30)))
    });
    group.bench_function("month_parallel", |b| {
        b.iter(|| runtime.block_on(orch.analyze_month(2024, 3)))
    });
    group.finish();
}

criterion_group!(benches, scoring_bench, period_bench);
criterion_main!(benches);
