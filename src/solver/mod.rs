//! Subset-capacity solving.
//!
//! Given non-negative weights and a ceiling, finds the subset whose sum is the
//! largest value not exceeding the ceiling. Weights and ceiling are decimal
//! MW values; the search runs on whole tenths of a MW.
//!
//! Two exact strategies are available and chosen by problem size:
//! - [`exhaustive`] enumerates every subset (small element counts, or
//!   ceilings too large to tabulate)
//! - [`tabulated`] fills a subset-sum table over the integer ceiling
//!
//! A problem that fits neither strategy is refused with
//! [`PlanError::SearchTooLarge`] before anything is allocated.

pub mod exhaustive;
pub mod tabulated;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;

use crate::error::PlanError;

/// Element count at or below which exhaustive search is used.
pub const EXHAUSTIVE_MAX_LEN: usize = 20;

/// Scaled ceiling above which a table would be too large to build.
pub const EXHAUSTIVE_MIN_CAPACITY: u64 = 100_000;

/// Widest problem a `u64` bitmask can enumerate.
pub const MAX_EXHAUSTIVE_WIDTH: usize = 63;

/// Largest subset-sum table built by default (8 bytes per cell).
pub const MAX_TABLE_CELLS: u64 = 25_000_000;

/// Thresholds for choosing a [`Strategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverLimits {
    /// Use exhaustive search for at most this many elements.
    pub exhaustive_max_len: usize,
    /// Use exhaustive search when the scaled ceiling exceeds this value.
    pub exhaustive_min_capacity: u64,
    /// Refuse tabulated problems whose table would exceed this many cells.
    pub max_table_cells: u64,
}

impl Default for SolverLimits {
    fn default() -> Self {
        Self {
            exhaustive_max_len: EXHAUSTIVE_MAX_LEN,
            exhaustive_min_capacity: EXHAUSTIVE_MIN_CAPACITY,
            max_table_cells: MAX_TABLE_CELLS,
        }
    }
}

/// Exact subset-sum strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Enumerate all `2^n` subsets in increasing bitmask order.
    Exhaustive,
    /// Dynamic-programming table over the integer ceiling.
    Tabulated,
}

impl Strategy {
    /// Picks the strategy for `len` elements and a scaled ceiling.
    ///
    /// # Errors
    ///
    /// [`PlanError::SearchTooLarge`] when the bitmask cannot hold `len`
    /// elements and the table would exceed `limits.max_table_cells`.
    pub fn for_problem(
        len: usize,
        capacity: u64,
        limits: &SolverLimits,
    ) -> Result<Self, PlanError> {
        let fits_mask = len <= MAX_EXHAUSTIVE_WIDTH;
        let prefers_exhaustive =
            capacity > limits.exhaustive_min_capacity || len <= limits.exhaustive_max_len;
        if fits_mask && prefers_exhaustive {
            return Ok(Self::Exhaustive);
        }

        let cells = tabulated::cell_count(len, capacity);
        if cells <= limits.max_table_cells {
            Ok(Self::Tabulated)
        } else {
            Err(PlanError::SearchTooLarge {
                elements: len,
                cells,
                limit: limits.max_table_cells,
            })
        }
    }

    /// Solves on whole-number weights.
    ///
    /// Returns the achieved sum and one flag per weight.
    pub fn solve(self, weights: &[u64], capacity: u64) -> (u64, Vec<bool>) {
        match self {
            Self::Exhaustive => exhaustive::solve(weights, capacity),
            Self::Tabulated => tabulated::solve(weights, capacity),
        }
    }
}

/// Outcome of one subset-capacity solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Sum of the chosen weights, at one-decimal precision.
    pub achieved: Decimal,
    /// One flag per input weight.
    pub selected: Vec<bool>,
}

impl Selection {
    fn empty(len: usize) -> Self {
        Self {
            achieved: Decimal::ZERO,
            selected: vec![false; len],
        }
    }

    /// Yields the items whose flag is set, in input order.
    pub fn chosen<'a, T>(&'a self, items: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        items
            .iter()
            .zip(&self.selected)
            .filter_map(|(item, &keep)| keep.then_some(item))
    }
}

/// Subset-capacity solver with configurable strategy thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubsetSolver {
    limits: SolverLimits,
}

impl SubsetSolver {
    pub fn new(limits: SolverLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &SolverLimits {
        &self.limits
    }

    /// Finds the subset of `weights` with the largest sum not above `capacity`.
    ///
    /// Weights must be non-negative. A ceiling at or below zero selects nothing.
    ///
    /// # Errors
    ///
    /// [`PlanError::SearchTooLarge`] when no strategy fits the limits.
    pub fn solve(&self, weights: &[Decimal], capacity: Decimal) -> Result<Selection, PlanError> {
        if capacity <= Decimal::ZERO {
            return Ok(Selection::empty(weights.len()));
        }

        let scaled: Vec<u64> = weights.iter().copied().map(to_tenths).collect();
        let target = to_tenths(capacity);
        let strategy = Strategy::for_problem(scaled.len(), target, &self.limits)?;
        let (achieved, selected) = strategy.solve(&scaled, target);

        Ok(Selection {
            achieved: from_tenths(achieved),
            selected,
        })
    }
}

/// Truncates a MW value to whole tenths.
fn to_tenths(value: Decimal) -> u64 {
    if value.is_sign_negative() {
        return 0;
    }
    (value.saturating_mul(Decimal::TEN))
        .trunc()
        .to_u64()
        .unwrap_or(u64::MAX)
}

fn from_tenths(tenths: u64) -> Decimal {
    Decimal::from(tenths) / Decimal::TEN
}
