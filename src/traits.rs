//! The solver seam.
//!
//! Both algorithms in [`crate::solvers`] implement [`CraneSolver`], so
//! drivers, tests and benchmarks can treat them interchangeably.

use crate::grid::Grid;
use crate::path::Path;

/// An algorithm for the crane unloading problem.
///
/// Contract shared by every implementation:
/// - `grid` is non-empty (guaranteed by [`Grid`] construction).
/// - If the bottom-right cell is reachable, the returned path ends there and
///   has the maximum `total_cranes` over all monotonic building-free paths.
/// - If it is unreachable, the returned path is the empty path at the origin.
/// - The result is deterministic for a given grid.
pub trait CraneSolver {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Compute the best route across `grid`.
    fn solve<'g>(&self, grid: &'g Grid) -> Path<'g>;
}
