//! Assorted counting helpers shared by the solvers and the probe binary.

/// Longest path the exhaustive solver accepts, in steps (exclusive bound).
pub const EXHAUSTIVE_STEP_LIMIT: usize = 64;

/// Number of monotonic paths across an obstacle-free `rows × columns` grid,
/// i.e. `C(rows + columns - 2, rows - 1)`.
///
/// Returns `None` on overflow or for an empty grid. This bounds the final
/// exhaustive frontier.
pub fn monotone_path_count(rows: usize, columns: usize) -> Option<u128> {
    if rows == 0 || columns == 0 {
        return None;
    }
    let n = (rows + columns - 2) as u128;
    let k = (rows.min(columns) - 1) as u128;
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) is always divisible by (i + 1) after the multiply.
        acc = acc.checked_mul(n - i)? / (i + 1);
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::monotone_path_count;

    #[test]
    fn empty_grid_has_no_count() {
        assert_eq!(monotone_path_count(0, 3), None);
        assert_eq!(monotone_path_count(3, 0), None);
    }

    #[test]
    fn small_binomials() {
        assert_eq!(monotone_path_count(1, 1), Some(1));
        assert_eq!(monotone_path_count(1, 10), Some(1));
        assert_eq!(monotone_path_count(2, 2), Some(2));
        assert_eq!(monotone_path_count(3, 3), Some(6));
        assert_eq!(monotone_path_count(4, 5), Some(35));
        assert_eq!(monotone_path_count(5, 4), Some(35));
    }

    #[test]
    fn symmetric_in_dimensions() {
        for r in 1..12 {
            for c in 1..12 {
                assert_eq!(monotone_path_count(r, c), monotone_path_count(c, r));
            }
        }
    }

    #[test]
    fn largest_exhaustive_grid_fits() {
        // 32 × 33 has 63 steps, the exhaustive maximum.
        assert!(monotone_path_count(32, 33).is_some());
    }
}
