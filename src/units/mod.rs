//! Generation units and the normalizer that turns raw ratings into them.

/// Raw-spec to effective-unit conversion.
pub mod normalize;
pub mod types;

pub use normalize::normalize;
pub use types::{FuelCosts, FuelModel, GenerationUnit, UnitKind, UnitSpec};
