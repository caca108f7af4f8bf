use rust_decimal::Decimal;

use crate::error::PlanError;

use super::types::{FuelCosts, GenerationUnit, UnitKind, UnitSpec};

/// Converts raw unit specifications into planner-ready units.
///
/// One unit per spec, in input order, with `assigned_load` set to zero.
///
/// # Errors
///
/// Returns [`PlanError::UnsupportedUnitKind`] for the first spec whose kind
/// is not recognized.
pub fn normalize(
    specs: &[UnitSpec],
    fuels: &FuelCosts,
) -> Result<Vec<GenerationUnit>, PlanError> {
    specs
        .iter()
        .map(|spec| {
            let kind: UnitKind = spec
                .kind
                .parse()
                .map_err(|kind| PlanError::UnsupportedUnitKind {
                    name: spec.name.clone(),
                    kind,
                })?;
            Ok(GenerationUnit {
                name: spec.name.clone(),
                kind,
                min_output: kind.effective_min(spec.min_rating),
                max_output: kind.effective_max(spec.max_rating, fuels),
                unit_cost: kind.unit_cost(spec.efficiency, fuels),
                assigned_load: Decimal::ZERO,
            })
        })
        .collect()
}
