//! Dispatch planner: renewable selection, dispatchable combination search,
//! and final load distribution.

use std::cmp::Ordering;
use std::collections::VecDeque;

use rust_decimal::Decimal;

use super::bounds::FeasibleRange;
use super::distribute::distribute;
use super::types::{PlanRequest, PlanResult};
use crate::error::PlanError;
use crate::solver::{SolverLimits, SubsetSolver};
use crate::units::{GenerationUnit, normalize};

/// Stateless least-cost planner.
///
/// Each call builds its own unit arena, so a single `Planner` can serve
/// concurrent requests without locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planner {
    solver: SubsetSolver,
}

impl Planner {
    pub fn new(limits: SolverLimits) -> Self {
        Self {
            solver: SubsetSolver::new(limits),
        }
    }

    /// Produces one dispatch per requested unit, in request order.
    ///
    /// # Errors
    ///
    /// Any [`PlanError`]; no partial plan is ever returned.
    pub fn plan(&self, request: &PlanRequest) -> Result<PlanResult, PlanError> {
        let units = self.dispatch(request)?;
        Ok(PlanResult::from_units(&units))
    }

    /// Like [`plan`](Self::plan) but returns the full unit arena with
    /// effective ratings, costs, and assigned loads.
    ///
    /// # Errors
    ///
    /// Any [`PlanError`].
    pub fn dispatch(&self, request: &PlanRequest) -> Result<Vec<GenerationUnit>, PlanError> {
        request.validate()?;
        let mut units = normalize(&request.units, &request.fuels)?;
        FeasibleRange::of(&units).check(request.requested_load)?;
        self.allocate(&mut units, request.requested_load)?;
        Ok(units)
    }

    /// Chooses renewable units first, then falls back to combining the
    /// remaining renewables with dispatchable units.
    fn allocate(&self, units: &mut [GenerationUnit], load: Decimal) -> Result<(), PlanError> {
        let renewables: Vec<usize> = (0..units.len())
            .filter(|&i| units[i].is_renewable())
            .collect();
        let wind_total: Decimal = renewables.iter().map(|&i| units[i].max_output).sum();

        match wind_total.cmp(&load) {
            Ordering::Equal => {
                run_at_max(units, &renewables);
                Ok(())
            }
            Ordering::Greater => {
                let capacities: Vec<Decimal> =
                    renewables.iter().map(|&i| units[i].max_output).collect();
                let selection = self.solver.solve(&capacities, load)?;
                let chosen: Vec<usize> = selection.chosen(&renewables).copied().collect();

                if selection.achieved == load {
                    run_at_max(units, &chosen);
                    Ok(())
                } else {
                    self.combine(units, chosen, load - selection.achieved, load)
                }
            }
            Ordering::Less => self.combine(units, renewables, load - wind_total, load),
        }
    }

    /// Searches for dispatchable units that can cover `load_left` on top of
    /// the renewable `pool`, giving up the smallest renewable unit after each
    /// failed attempt.
    fn combine(
        &self,
        units: &mut [GenerationUnit],
        mut pool: Vec<usize>,
        mut load_left: Decimal,
        load: Decimal,
    ) -> Result<(), PlanError> {
        pool.sort_by_key(|&i| units[i].max_output);
        let mut pool = VecDeque::from(pool);

        loop {
            let mut candidates: Vec<usize> = (0..units.len())
                .filter(|&i| !units[i].is_renewable() && units[i].min_output < load_left)
                .collect();
            candidates.sort_by_key(|&i| units[i].unit_cost);

            let floors: Vec<Decimal> = candidates.iter().map(|&i| units[i].min_output).collect();
            let selection = self.solver.solve(&floors, load_left)?;
            // A zero floor never raises the floor sum, so such units always join.
            let chosen: Vec<usize> = candidates
                .iter()
                .zip(&selection.selected)
                .filter(|&(&i, &keep)| keep || units[i].min_output.is_zero())
                .map(|(&i, _)| i)
                .collect();
            let reachable: Decimal = chosen.iter().map(|&i| units[i].max_output).sum();

            if reachable >= load_left {
                run_at_max(units, pool.make_contiguous());
                distribute(units, &chosen, load_left);
                return Ok(());
            }

            match pool.pop_front() {
                Some(smallest) => load_left += units[smallest].max_output,
                None => return Err(PlanError::NoFeasibleCombination { load }),
            }
        }
    }
}

fn run_at_max(units: &mut [GenerationUnit], indices: &[usize]) {
    for &i in indices {
        units[i].assigned_load = units[i].max_output;
    }
}
