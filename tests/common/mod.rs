//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use powerplant_dispatch::io::payload::ProductionPlanRequest;
use powerplant_dispatch::plan::PlanRequest;
use powerplant_dispatch::units::{FuelCosts, UnitSpec};
use rust_decimal::Decimal;
use rust_decimal::dec;

/// Path of a file under `demos/`.
pub fn demo_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name)
}

/// Raw JSON body of a demo payload.
pub fn demo_body(name: &str) -> String {
    fs::read_to_string(demo_path(name)).expect("demo payload should be readable")
}

/// Demo payload decoded into planner input.
pub fn demo_request(name: &str) -> PlanRequest {
    ProductionPlanRequest::from_json_str(&demo_body(name))
        .expect("demo payload should decode")
        .into_plan_request()
}

/// Market prices of the demo payloads with the given wind fraction.
pub fn demo_fuels(wind_fraction: Decimal) -> FuelCosts {
    FuelCosts {
        gas: dec!(13.4),
        kerosine: dec!(50.8),
        co2: dec!(20),
        wind_fraction,
    }
}

pub fn gas(name: &str, efficiency: Decimal, pmin: u32, pmax: u32) -> UnitSpec {
    spec(name, "gasfired", efficiency, pmin, pmax)
}

pub fn turbojet(name: &str, efficiency: Decimal, pmax: u32) -> UnitSpec {
    spec(name, "turbojet", efficiency, 0, pmax)
}

pub fn wind(name: &str, pmax: u32) -> UnitSpec {
    spec(name, "windturbine", Decimal::ONE, 0, pmax)
}

fn spec(name: &str, kind: &str, efficiency: Decimal, pmin: u32, pmax: u32) -> UnitSpec {
    UnitSpec {
        name: name.to_string(),
        kind: kind.to_string(),
        efficiency,
        min_rating: Decimal::from(pmin),
        max_rating: Decimal::from(pmax),
    }
}
