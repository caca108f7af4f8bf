//! Dispatch planning.
//!
//! [`Planner::plan`] turns a [`PlanRequest`] into a [`PlanResult`] that meets
//! the requested load exactly, or fails with a [`PlanError`](crate::error::PlanError).

pub mod bounds;
pub mod distribute;
pub mod planner;
pub mod summary;
pub mod types;

pub use bounds::FeasibleRange;
pub use planner::Planner;
pub use summary::PlanSummary;
pub use types::{PlanRequest, PlanResult, UnitDispatch};
