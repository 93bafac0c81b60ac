//! Attacking-pair heuristic.
//!
//! Each queen is compared only with queens in columns strictly to its
//! right: along its own row and along both rightward diagonals. Every
//! attacking pair is therefore counted exactly once. Two queens never share
//! a column, so column attacks need no check.

/// Number of queen pairs on a board of `size` columns: `size * (size - 1) / 2`.
///
/// This is the best achievable heuristic value.
pub fn max_value(size: usize) -> usize {
    size * size.saturating_sub(1) / 2
}

/// Counts attacking pairs in a placement (`rows[col]` is the queen's row).
///
/// # Complexity
/// O(n^2) time, O(1) space
pub fn attacking_pairs(rows: &[usize]) -> usize {
    let mut total = 0;
    for (col, &row) in rows.iter().enumerate() {
        for (offset, &other) in rows[col + 1..].iter().enumerate() {
            let distance = offset + 1;
            // Same row, or on the up-right / down-right diagonal.
            if other == row || other.abs_diff(row) == distance {
                total += 1;
            }
        }
    }
    total
}
