//! Aggregate feasibility bounds.

use rust_decimal::Decimal;

use crate::error::PlanError;
use crate::units::GenerationUnit;

/// Smallest and largest load the unit set could possibly produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeasibleRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl FeasibleRange {
    /// Computes the range of a normalized unit set.
    ///
    /// The lower bound is the smaller of the smallest positive renewable
    /// capacity and the smallest dispatchable minimum output. A missing
    /// group is ignored; with no units at all both bounds are zero.
    pub fn of(units: &[GenerationUnit]) -> Self {
        let smallest_renewable = units
            .iter()
            .filter(|u| u.is_renewable() && !u.max_output.is_zero())
            .map(|u| u.max_output)
            .min();
        let smallest_floor = units
            .iter()
            .filter(|u| !u.is_renewable())
            .map(|u| u.min_output)
            .min();

        let min = match (smallest_renewable, smallest_floor) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => Decimal::ZERO,
        };

        Self {
            min,
            max: units.iter().map(|u| u.max_output).sum(),
        }
    }

    /// Rejects loads outside the range.
    ///
    /// # Errors
    ///
    /// [`PlanError::LoadBelowMinimum`] or [`PlanError::LoadAboveCapacity`].
    pub fn check(&self, load: Decimal) -> Result<(), PlanError> {
        if load < self.min {
            return Err(PlanError::LoadBelowMinimum {
                load,
                minimum: self.min,
            });
        }
        if load > self.max {
            return Err(PlanError::LoadAboveCapacity {
                load,
                capacity: self.max,
            });
        }
        Ok(())
    }
}
