//! Shared test fixtures for the price tracker integration tests.
//!
//! Provides a small hand-written batch helper and `mock_catalog()`, which
//! generates a month of daily observations for two phone models with a
//! seeded random price wobble.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use price_tracker_core::Observation;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const CATALOG_DAYS: i64 = 31;

/// `(model, color, ram, storage, base price)` rows the mock catalog is built from.
const BASE_CATALOG: &[(&str, &str, &str, &str, f64)] = &[
    ("SAMSUNG_GALAXY_S24", "Cobalt Violet", "8GB", "128GB", 49999.0),
    ("SAMSUNG_GALAXY_S24", "Onyx Black", "8GB", "128GB", 40999.0),
    ("SAMSUNG_GALAXY_S24", "Amber Yellow", "8GB", "256GB", 45999.0),
    ("SAMSUNG_GALAXY_S24", "Cobalt Violet", "8GB", "256GB", 55999.0),
    ("SAMSUNG_GALAXY_S24", "Marble Grey", "8GB", "256GB", 45999.0),
    ("VIVO_T3_5G", "Cosmic Blue", "8GB", "128GB", 18499.0),
    ("SAMSUNG_GALAXY_S24", "Marble Grey", "8GB", "128GB", 40999.0),
    ("VIVO_T3_5G", "Crystal Flake", "8GB", "256GB", 20499.0),
    ("VIVO_T3_5G", "Cosmic Blue", "8GB", "256GB", 20499.0),
    ("SAMSUNG_GALAXY_S24", "Amber Yellow", "8GB", "128GB", 40999.0),
    ("VIVO_T3_5G", "Crystal Flake", "8GB", "128GB", 18499.0),
    ("SAMSUNG_GALAXY_S24", "Onyx Black", "8GB", "256GB", 45999.0),
];

pub fn obs(color: &str, ram: &str, storage: &str, price: f64, timestamp: &str) -> Observation {
    Observation::new("TEST_PHONE", color, ram, storage, price, timestamp)
}

pub fn catalog_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// One observation per base row per day for `CATALOG_DAYS` days. The last
/// day carries the base price exactly; earlier days vary by up to 5%.
pub fn mock_catalog(seed: u64) -> Vec<Observation> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::new();
    for day in 0..CATALOG_DAYS {
        let date = catalog_start() + Duration::days(day);
        let is_last = day == CATALOG_DAYS - 1;
        for (model, color, ram, storage, base) in BASE_CATALOG {
            let variation = if is_last { 0.0 } else { rng.gen_range(-0.05..0.05) };
            let price = (base * (1.0 + variation) * 100.0).round() / 100.0;
            let timestamp = format!("{}T09:30:00.000000", date.format("%Y-%m-%d"));
            records.push(Observation::new(model, color, ram, storage, price, &timestamp));
        }
    }
    records
}

pub fn shuffled(batch: &[Observation], seed: u64) -> Vec<Observation> {
    let mut out = batch.to_vec();
    out.shuffle(&mut StdRng::seed_from_u64(seed));
    out
}
