//! Least-cost power plant dispatch.
//!
//! Given a requested load, fuel prices, wind availability, and a set of
//! plants, [`plan::Planner`] decides how much each plant produces so that the
//! total matches the load exactly, preferring free wind and cheap fuel.

#[cfg(feature = "api")]
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod plan;
pub mod solver;
pub mod units;
