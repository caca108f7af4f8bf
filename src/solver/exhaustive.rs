//! Exhaustive subset enumeration.

/// Enumerates every subset in increasing bitmask order.
///
/// Bit `j` of the mask toggles element `j`, so earlier elements toggle first.
/// Among subsets with the same best sum, the first one found wins.
///
/// `weights` must have at most 63 elements.
pub fn solve(weights: &[u64], capacity: u64) -> (u64, Vec<bool>) {
    let n = weights.len();
    debug_assert!(n <= super::MAX_EXHAUSTIVE_WIDTH);

    // prefix[j] is the sum of weights[..j]; u128 so no sum saturates.
    let prefix: Vec<u128> = std::iter::once(0)
        .chain(weights.iter().scan(0_u128, |acc, &w| {
            *acc += u128::from(w);
            Some(*acc)
        }))
        .collect();
    let ceiling = u128::from(capacity);

    let mut best_sum = 0_u128;
    let mut best_mask = 0_u64;
    let mut total = 0_u128;

    for mask in 1..(1_u64 << n) {
        // Incrementing clears bits below `bit` (all set before) and sets `bit`.
        let bit = mask.trailing_zeros() as usize;
        total = total - prefix[bit] + u128::from(weights[bit]);

        if total <= ceiling && total > best_sum {
            best_sum = total;
            best_mask = mask;
            if best_sum == ceiling {
                break;
            }
        }
    }

    let selected = (0..n).map(|j| best_mask & (1 << j) != 0).collect();
    (u64::try_from(best_sum).unwrap_or(capacity), selected)
}
