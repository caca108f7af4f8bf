//! JSON wire format of the production-plan service.
//!
//! Decimal fields travel as plain JSON numbers in both directions.

use rust_decimal::Decimal;
use rust_decimal::dec;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::plan::{PlanRequest, PlanResult};
use crate::units::{FuelCosts, UnitSpec};

/// Request body of `POST /productionplan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlanRequest {
    /// Load to produce (MWh).
    #[serde(with = "rust_decimal::serde::float")]
    pub load: Decimal,
    pub fuels: Fuels,
    pub powerplants: Vec<PowerPlant>,
}

/// Market prices and wind availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fuels {
    #[serde(rename = "gas(euro/MWh)", with = "rust_decimal::serde::float")]
    pub gas: Decimal,
    #[serde(rename = "kerosine(euro/MWh)", with = "rust_decimal::serde::float")]
    pub kerosine: Decimal,
    #[serde(rename = "co2(euro/ton)", with = "rust_decimal::serde::float")]
    pub co2: Decimal,
    /// Wind availability in percent (0-100).
    #[serde(rename = "wind(%)", with = "rust_decimal::serde::float")]
    pub wind: Decimal,
}

/// One plant as sent by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerPlant {
    pub name: String,
    /// `gasfired`, `turbojet` or `windturbine`; checked during planning.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub efficiency: Decimal,
    pub pmin: u32,
    pub pmax: u32,
}

/// One entry of the response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerPlantDispatch {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub p: Decimal,
}

impl ProductionPlanRequest {
    /// Decodes a request body.
    ///
    /// # Errors
    ///
    /// [`PlanError::InvalidRequest`] if the text is not JSON or misses a field.
    pub fn from_json_str(s: &str) -> Result<Self, PlanError> {
        serde_json::from_str(s).map_err(|e| PlanError::InvalidRequest(e.to_string()))
    }

    /// Converts the wire request into planner input.
    pub fn into_plan_request(self) -> PlanRequest {
        PlanRequest {
            requested_load: self.load,
            fuels: FuelCosts {
                gas: self.fuels.gas,
                kerosine: self.fuels.kerosine,
                co2: self.fuels.co2,
                wind_fraction: self.fuels.wind / dec!(100),
            },
            units: self
                .powerplants
                .into_iter()
                .map(|plant| UnitSpec {
                    name: plant.name,
                    kind: plant.kind,
                    efficiency: plant.efficiency,
                    min_rating: Decimal::from(plant.pmin),
                    max_rating: Decimal::from(plant.pmax),
                })
                .collect(),
        }
    }
}

/// Builds the response body, one entry per plant in request order.
pub fn response_body(result: &PlanResult) -> Vec<PowerPlantDispatch> {
    result
        .dispatches
        .iter()
        .map(|d| PowerPlantDispatch {
            name: d.name.clone(),
            p: d.load.normalize(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::plan::UnitDispatch;

    const BODY: &str = r#"{
        "load": 480,
        "fuels": {
            "gas(euro/MWh)": 13.4,
            "kerosine(euro/MWh)": 50.8,
            "co2(euro/ton)": 20,
            "wind(%)": 60
        },
        "powerplants": [
            { "name": "gasfiredbig1", "type": "gasfired", "efficiency": 0.53, "pmin": 100, "pmax": 460 },
            { "name": "windpark1", "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 150 }
        ]
    }"#;

    #[test]
    fn decodes_renamed_keys_exactly() {
        let request = ProductionPlanRequest::from_json_str(BODY).expect("valid body");
        assert_eq!(request.load, dec!(480));
        assert_eq!(request.fuels.gas, dec!(13.4));
        assert_eq!(request.fuels.kerosine, dec!(50.8));
        assert_eq!(request.fuels.wind, dec!(60));
        assert_eq!(request.powerplants[0].efficiency, dec!(0.53));
        assert_eq!(request.powerplants[1].kind, "windturbine");
    }

    #[test]
    fn converts_wind_percent_to_fraction() {
        let request = ProductionPlanRequest::from_json_str(BODY)
            .expect("valid body")
            .into_plan_request();
        assert_eq!(request.fuels.wind_fraction, dec!(0.6));
        assert_eq!(request.units[0].min_rating, dec!(100));
        assert_eq!(request.units[0].max_rating, dec!(460));
        assert_eq!(request.units.len(), 2);
    }

    #[test]
    fn missing_field_is_invalid_request() {
        let err = ProductionPlanRequest::from_json_str(r#"{"load": 10, "fuels": {}}"#).unwrap_err();
        assert!(matches!(err, PlanError::InvalidRequest(_)));
    }

    #[test]
    fn negative_rating_is_invalid_request() {
        let body = BODY.replace("\"pmin\": 100", "\"pmin\": -100");
        let err = ProductionPlanRequest::from_json_str(&body).unwrap_err();
        assert!(matches!(err, PlanError::InvalidRequest(_)));
    }

    #[test]
    fn not_json_is_invalid_request() {
        assert!(matches!(
            ProductionPlanRequest::from_json_str("load=480"),
            Err(PlanError::InvalidRequest(_))
        ));
    }

    #[test]
    fn response_entries_are_numbers() {
        let result = PlanResult {
            dispatches: vec![
                UnitDispatch {
                    name: "gasfiredbig1".into(),
                    load: dec!(368.4),
                },
                UnitDispatch {
                    name: "tj1".into(),
                    load: Decimal::ZERO,
                },
            ],
        };
        let value = serde_json::to_value(response_body(&result)).expect("serializable");
        assert_eq!(
            value,
            json!([
                { "name": "gasfiredbig1", "p": 368.4 },
                { "name": "tj1", "p": 0.0 }
            ])
        );
    }
}
