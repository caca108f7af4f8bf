//! Planner inputs and outputs.

use std::fmt;

use rust_decimal::Decimal;

use crate::error::PlanError;
use crate::units::{FuelCosts, GenerationUnit, UnitSpec};

/// One planning request. Immutable while the plan is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    /// Load to match exactly (MWh for the hour).
    pub requested_load: Decimal,
    /// Fuel prices and wind availability.
    pub fuels: FuelCosts,
    /// Raw unit definitions, in output order.
    pub units: Vec<UnitSpec>,
}

impl PlanRequest {
    /// Checks the preconditions the planner relies on.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidRequest`] for a negative load, a wind
    /// fraction outside `[0, 1]`, or a unit with a negative efficiency,
    /// a negative rating, or `min > max`.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.requested_load < Decimal::ZERO {
            return Err(PlanError::InvalidRequest(format!(
                "load must be >= 0, got {}",
                self.requested_load
            )));
        }

        let fraction = self.fuels.wind_fraction;
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(PlanError::InvalidRequest(format!(
                "wind availability must be within [0, 1], got {fraction}"
            )));
        }

        for spec in &self.units {
            if spec.efficiency < Decimal::ZERO {
                return Err(PlanError::InvalidRequest(format!(
                    "power plant \"{}\": efficiency must be >= 0",
                    spec.name
                )));
            }
            if spec.min_rating < Decimal::ZERO || spec.max_rating < Decimal::ZERO {
                return Err(PlanError::InvalidRequest(format!(
                    "power plant \"{}\": pmin and pmax must be >= 0",
                    spec.name
                )));
            }
            if spec.min_rating > spec.max_rating {
                return Err(PlanError::InvalidRequest(format!(
                    "power plant \"{}\": pmin ({}) must be <= pmax ({})",
                    spec.name, spec.min_rating, spec.max_rating
                )));
            }
        }

        Ok(())
    }
}

/// Dispatch of a single unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDispatch {
    pub name: String,
    /// Assigned load (MW).
    pub load: Decimal,
}

/// Final plan: one entry per requested unit, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlanResult {
    pub dispatches: Vec<UnitDispatch>,
}

impl PlanResult {
    /// Reads the final assignments out of the unit arena.
    pub fn from_units(units: &[GenerationUnit]) -> Self {
        Self {
            dispatches: units
                .iter()
                .map(|unit| UnitDispatch {
                    name: unit.name.clone(),
                    load: unit.assigned_load,
                })
                .collect(),
        }
    }

    /// Sum of all assigned loads.
    pub fn total_load(&self) -> Decimal {
        self.dispatches.iter().map(|d| d.load).sum()
    }

    /// Assigned load of the first unit called `name`.
    pub fn load_of(&self, name: &str) -> Option<Decimal> {
        self.dispatches
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.load)
    }
}

impl fmt::Display for UnitDispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<24} {:>8.1} MW", self.name, self.load)
    }
}
