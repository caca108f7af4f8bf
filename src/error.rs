//! Planning failures.

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a production plan cannot be produced.
///
/// Every variant is a deterministic function of the request: retrying the
/// same request reproduces the same failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The request is absent or malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A unit specification names a kind the normalizer does not know.
    #[error("power plant \"{name}\" has unsupported type \"{kind}\"")]
    UnsupportedUnitKind { name: String, kind: String },

    /// Every unit produces more than the requested load.
    #[error("all power plants produce more than requested load: {load} MWh (minimum {minimum} MWh)")]
    LoadBelowMinimum { load: Decimal, minimum: Decimal },

    /// The requested load exceeds the combined maximum output.
    #[error("cannot generate load: {load} MWh with available plants (capacity {capacity} MWh)")]
    LoadAboveCapacity { load: Decimal, capacity: Decimal },

    /// Bounds hold in aggregate but no unit combination realizes the load.
    #[error("no combination of power plants can generate load: {load} MWh")]
    NoFeasibleCombination { load: Decimal },

    /// The combination search would exceed the configured table size.
    #[error("search over {elements} power plants needs {cells} table cells (limit {limit})")]
    SearchTooLarge { elements: usize, cells: u64, limit: u64 },
}

impl PlanError {
    /// Returns `true` for the failures meaning "the request cannot be satisfied".
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(
            self,
            Self::LoadBelowMinimum { .. }
                | Self::LoadAboveCapacity { .. }
                | Self::NoFeasibleCombination { .. }
        )
    }
}
