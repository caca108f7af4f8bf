//! Aggregate figures for a finished plan.

use std::fmt;

use rust_decimal::Decimal;

use crate::units::GenerationUnit;

/// Totals over a dispatched unit arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanSummary {
    /// Sum of assigned loads (MW).
    pub total_load: Decimal,
    /// Hourly cost of the plan (EUR), saturating.
    pub total_cost: Decimal,
    /// Units with a non-zero assignment.
    pub units_running: usize,
    /// Units in the plan.
    pub units_total: usize,
}

impl PlanSummary {
    pub fn from_units(units: &[GenerationUnit]) -> Self {
        let mut summary = Self {
            units_total: units.len(),
            ..Self::default()
        };
        for unit in units {
            if unit.assigned_load.is_zero() {
                continue;
            }
            summary.units_running += 1;
            summary.total_load += unit.assigned_load;
            summary.total_cost = summary
                .total_cost
                .saturating_add(unit.assigned_load.saturating_mul(unit.unit_cost));
        }
        summary
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Plan Summary ---")?;
        writeln!(f, "Dispatched load:  {:.1} MW", self.total_load)?;
        writeln!(f, "Hourly cost:      {:.2} EUR", self.total_cost)?;
        write!(
            f,
            "Units running:    {} of {}",
            self.units_running, self.units_total
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;
    use crate::units::{FuelModel, UnitKind};

    fn unit(kind: UnitKind, load: Decimal, cost: Decimal) -> GenerationUnit {
        GenerationUnit {
            name: "u".into(),
            kind,
            min_output: Decimal::ZERO,
            max_output: dec!(500),
            unit_cost: cost,
            assigned_load: load,
        }
    }

    #[test]
    fn sums_load_and_cost_of_running_units() {
        let gas = UnitKind::FuelBurning(FuelModel::EfficiencyDriven);
        let units = [
            unit(UnitKind::Renewable, dec!(90), Decimal::ZERO),
            unit(gas, dec!(100), dec!(31.5)),
            unit(gas, Decimal::ZERO, dec!(40)),
        ];
        let summary = PlanSummary::from_units(&units);
        assert_eq!(summary.total_load, dec!(190));
        assert_eq!(summary.total_cost, dec!(3150));
        assert_eq!(summary.units_running, 2);
        assert_eq!(summary.units_total, 3);
    }

    #[test]
    fn idle_unit_with_unbounded_cost_adds_nothing() {
        let units = [unit(
            UnitKind::FuelBurning(FuelModel::PureRatioDriven),
            Decimal::ZERO,
            Decimal::MAX,
        )];
        assert_eq!(PlanSummary::from_units(&units).total_cost, Decimal::ZERO);
    }

    #[test]
    fn cost_saturates() {
        let gas = UnitKind::FuelBurning(FuelModel::EfficiencyDriven);
        let units = [unit(gas, dec!(10), Decimal::MAX), unit(gas, dec!(10), Decimal::MAX)];
        assert_eq!(PlanSummary::from_units(&units).total_cost, Decimal::MAX);
    }

    #[test]
    fn display_lists_totals() {
        let summary = PlanSummary {
            total_load: dec!(480),
            total_cost: dec!(12345.6),
            units_running: 3,
            units_total: 6,
        };
        let text = summary.to_string();
        assert!(text.starts_with("--- Plan Summary ---"));
        assert!(text.contains("480.0 MW"));
        assert!(text.contains("12345.60 EUR"));
        assert!(text.contains("3 of 6"));
    }
}
