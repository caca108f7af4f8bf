//! Unit kinds, raw specifications, and the normalized unit record.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::dec;

/// Carbon emitted per MWh produced by an efficiency-driven plant (ton/MWh).
pub const CARBON_FACTOR: Decimal = dec!(0.3);

/// How a fuel-burning unit turns fuel price into cost per MWh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelModel {
    /// Gas-like: burns gas at the plant efficiency and pays for emitted CO2.
    EfficiencyDriven,
    /// Turbojet-like: burns kerosine at the plant efficiency, no carbon surcharge.
    PureRatioDriven,
}

/// Closed set of generation unit kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Zero-cost unit whose output scales with wind availability.
    Renewable,
    /// Dispatchable unit with a minimum operating output and a fuel cost.
    FuelBurning(FuelModel),
}

impl UnitKind {
    /// Wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Renewable => "windturbine",
            Self::FuelBurning(FuelModel::EfficiencyDriven) => "gasfired",
            Self::FuelBurning(FuelModel::PureRatioDriven) => "turbojet",
        }
    }

    pub fn is_renewable(&self) -> bool {
        matches!(self, Self::Renewable)
    }

    /// Maximum output after applying availability.
    ///
    /// Renewable ratings are scaled by the wind fraction and rounded to one
    /// decimal place; every other rating is returned unchanged.
    pub fn effective_max(&self, raw_max: Decimal, fuels: &FuelCosts) -> Decimal {
        match self {
            Self::Renewable => (raw_max * fuels.wind_fraction).round_dp(1),
            Self::FuelBurning(_) => raw_max,
        }
    }

    /// Lower operating bound. Renewable units can always run down to zero.
    pub fn effective_min(&self, raw_min: Decimal) -> Decimal {
        match self {
            Self::Renewable => Decimal::ZERO,
            Self::FuelBurning(_) => raw_min,
        }
    }

    /// Cost of producing one MWh.
    ///
    /// A fuel-burning unit with zero efficiency costs `Decimal::MAX`, which
    /// keeps it at the end of every cost ordering.
    pub fn unit_cost(&self, efficiency: Decimal, fuels: &FuelCosts) -> Decimal {
        match self {
            Self::Renewable => Decimal::ZERO,
            Self::FuelBurning(FuelModel::EfficiencyDriven) => fuels
                .gas
                .checked_div(efficiency)
                .map_or(Decimal::MAX, |fuel| {
                    fuel.saturating_add(CARBON_FACTOR.saturating_mul(fuels.co2))
                }),
            Self::FuelBurning(FuelModel::PureRatioDriven) => fuels
                .kerosine
                .checked_div(efficiency)
                .unwrap_or(Decimal::MAX),
        }
    }
}

impl FromStr for UnitKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windturbine" => Ok(Self::Renewable),
            "gasfired" => Ok(Self::FuelBurning(FuelModel::EfficiencyDriven)),
            "turbojet" => Ok(Self::FuelBurning(FuelModel::PureRatioDriven)),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Market inputs shared by every unit of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelCosts {
    /// Gas price (euro/MWh of fuel).
    pub gas: Decimal,
    /// Kerosine price (euro/MWh of fuel).
    pub kerosine: Decimal,
    /// CO2 emission allowance price (euro/ton).
    pub co2: Decimal,
    /// Wind availability as a fraction (0.0 to 1.0).
    pub wind_fraction: Decimal,
}

/// Raw unit definition as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSpec {
    pub name: String,
    /// Unparsed kind; validated by [`normalize`](super::normalize).
    pub kind: String,
    pub efficiency: Decimal,
    pub min_rating: Decimal,
    pub max_rating: Decimal,
}

/// Normalized unit record used by the planner.
///
/// Built fresh for each request; only the planner writes `assigned_load`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationUnit {
    pub name: String,
    pub kind: UnitKind,
    /// Lower bound on a non-zero dispatch (MW). Zero for renewable units.
    pub min_output: Decimal,
    /// Upper bound on dispatch (MW), after availability scaling.
    pub max_output: Decimal,
    /// Cost per MWh (euro).
    pub unit_cost: Decimal,
    /// Planned dispatch (MW).
    pub assigned_load: Decimal,
}

impl GenerationUnit {
    pub fn is_renewable(&self) -> bool {
        self.kind.is_renewable()
    }

    /// Spare capacity above the current assignment.
    pub fn headroom(&self) -> Decimal {
        self.max_output - self.assigned_load
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fuels() -> FuelCosts {
        FuelCosts {
            gas: dec!(13.4),
            kerosine: dec!(50.8),
            co2: dec!(20),
            wind_fraction: dec!(0.6),
        }
    }

    #[test]
    fn parses_wire_names_case_insensitively() {
        assert_eq!("windturbine".parse::<UnitKind>(), Ok(UnitKind::Renewable));
        assert_eq!(
            "GasFired".parse::<UnitKind>(),
            Ok(UnitKind::FuelBurning(FuelModel::EfficiencyDriven))
        );
        assert_eq!(
            "turbojet".parse::<UnitKind>(),
            Ok(UnitKind::FuelBurning(FuelModel::PureRatioDriven))
        );
        assert_eq!("nuclear".parse::<UnitKind>(), Err("nuclear".to_string()));
    }

    #[test]
    fn renewable_max_is_scaled_and_rounded() {
        let kind = UnitKind::Renewable;
        assert_eq!(kind.effective_max(dec!(150), &fuels()), dec!(90.0));
        assert_eq!(kind.effective_max(dec!(36), &fuels()), dec!(21.6));
        // 7 * 0.33 = 2.31 rounds to 2.3
        let mut f = fuels();
        f.wind_fraction = dec!(0.33);
        assert_eq!(kind.effective_max(dec!(7), &f), dec!(2.3));
    }

    #[test]
    fn fuel_burning_max_is_unchanged() {
        let kind = UnitKind::FuelBurning(FuelModel::EfficiencyDriven);
        assert_eq!(kind.effective_max(dec!(460), &fuels()), dec!(460));
    }

    #[test]
    fn gas_cost_includes_carbon_surcharge() {
        let kind = UnitKind::FuelBurning(FuelModel::EfficiencyDriven);
        let cost = kind.unit_cost(dec!(0.5), &fuels());
        // 13.4 / 0.5 + 0.3 * 20
        assert_eq!(cost, dec!(32.8));
    }

    #[test]
    fn turbojet_cost_has_no_surcharge() {
        let kind = UnitKind::FuelBurning(FuelModel::PureRatioDriven);
        assert_eq!(kind.unit_cost(dec!(0.4), &fuels()), dec!(127));
    }

    #[test]
    fn zero_efficiency_costs_max() {
        let gas = UnitKind::FuelBurning(FuelModel::EfficiencyDriven);
        let jet = UnitKind::FuelBurning(FuelModel::PureRatioDriven);
        assert_eq!(gas.unit_cost(Decimal::ZERO, &fuels()), Decimal::MAX);
        assert_eq!(jet.unit_cost(Decimal::ZERO, &fuels()), Decimal::MAX);
    }

    #[test]
    fn renewable_is_free() {
        assert_eq!(
            UnitKind::Renewable.unit_cost(dec!(1), &fuels()),
            Decimal::ZERO
        );
    }
}
