//! Tabulated subset-sum over an integer ceiling.

/// Row-major `(n + 1) x (capacity + 1)` table of best sums.
struct Table {
    width: usize,
    cells: Vec<u64>,
}

impl Table {
    fn new(rows: usize, width: usize) -> Self {
        Self {
            width,
            cells: vec![0; rows * width],
        }
    }

    fn get(&self, row: usize, col: usize) -> u64 {
        self.cells[row * self.width + col]
    }

    fn set(&mut self, row: usize, col: usize, value: u64) {
        self.cells[row * self.width + col] = value;
    }
}

/// Number of cells a table for `len` weights and `capacity` would hold,
/// saturating at `u64::MAX`.
pub fn cell_count(len: usize, capacity: u64) -> u64 {
    let rows = u64::try_from(len).unwrap_or(u64::MAX).saturating_add(1);
    rows.saturating_mul(capacity.saturating_add(1))
}

/// Solves with a bounded knapsack table, then backtracks the table deltas
/// from the final cell to recover the chosen elements.
///
/// Callers bound the table size with [`cell_count`] first.
pub fn solve(weights: &[u64], capacity: u64) -> (u64, Vec<bool>) {
    let n = weights.len();
    let cap = usize::try_from(capacity).unwrap_or(usize::MAX - 1);
    let mut table = Table::new(n + 1, cap + 1);

    for (i, &weight) in weights.iter().enumerate() {
        let row = i + 1;
        for col in 1..=cap {
            let skip = table.get(row - 1, col);
            let value = match usize::try_from(weight) {
                Ok(w) if w <= col => skip.max(weight + table.get(row - 1, col - w)),
                _ => skip,
            };
            table.set(row, col, value);
        }
    }

    let achieved = table.get(n, cap);

    let mut selected = vec![false; n];
    let (mut row, mut col) = (n, cap);
    while row > 0 && col > 0 {
        if table.get(row, col) != table.get(row - 1, col) {
            selected[row - 1] = true;
            // A differing cell means the weight fit in `col`.
            let weight = usize::try_from(weights[row - 1]).unwrap_or(col);
            col = col.saturating_sub(weight);
        }
        row -= 1;
    }

    (achieved, selected)
}
