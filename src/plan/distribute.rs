//! Load distribution across selected dispatchable units, plus backward repair.
//!
//! All functions work on the unit arena and a list of arena indices ordered
//! by ascending cost.

use rust_decimal::Decimal;

use crate::units::GenerationUnit;

/// Assigns `load_left` across `chosen` units.
///
/// 1. every chosen unit starts at its minimum output
/// 2. the rest of the load fills units toward their maximum, cheapest first
/// 3. [`shift_backward`] moves whole loads from later units into earlier ones
///
/// The caller guarantees the floors fit under `load_left` and the combined
/// maximum reaches it.
pub fn distribute(units: &mut [GenerationUnit], chosen: &[usize], load_left: Decimal) {
    for &i in chosen {
        units[i].assigned_load = units[i].min_output;
    }

    let floor: Decimal = chosen.iter().map(|&i| units[i].min_output).sum();
    let remaining = fill_in_order(units, chosen, load_left - floor);
    debug_assert!(remaining.is_zero(), "undistributed load: {remaining}");

    shift_backward(units, chosen);
}

/// Raises units toward their maximum in order until `amount` is spent.
///
/// Returns whatever could not be placed.
fn fill_in_order(units: &mut [GenerationUnit], targets: &[usize], amount: Decimal) -> Decimal {
    let mut left = amount;
    for &i in targets {
        if left <= Decimal::ZERO {
            break;
        }
        let step = units[i].headroom().min(left);
        units[i].assigned_load += step;
        left -= step;
    }
    left
}

/// Scans from the last unit back to the second, moving each unit's whole
/// load into the units before it when they have enough spare headroom.
///
/// A unit whose load does not fit is left unchanged. Total dispatched load
/// never changes.
pub fn shift_backward(units: &mut [GenerationUnit], chosen: &[usize]) {
    for pos in (1..chosen.len()).rev() {
        let source = chosen[pos];
        let amount = units[source].assigned_load;
        if amount.is_zero() {
            continue;
        }

        let earlier = &chosen[..pos];
        let spare: Decimal = earlier.iter().map(|&i| units[i].headroom()).sum();
        if spare < amount {
            continue;
        }

        fill_in_order(units, earlier, amount);
        units[source].assigned_load = Decimal::ZERO;
    }
}
