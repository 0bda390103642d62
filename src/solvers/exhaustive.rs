//! Exhaustive breadth-first enumeration of monotonic paths.
//!
//! Level `k` of the search holds every building-free path with exactly `k`
//! steps. Each level is drained once: complete paths compete for the best
//! score, the rest branch east and south into the next level. The frontier is
//! bounded by `C(rows + columns - 2, rows - 1)` paths, so the search is only
//! viable for small grids and refuses paths of 64 steps or more.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::grid::Grid;
use crate::path::{Path, StepDirection};
use crate::traits::CraneSolver;
use crate::utils::{monotone_path_count, EXHAUSTIVE_STEP_LIMIT};

/// Frontier length from which a level is expanded in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Level-synchronous exhaustive search.
///
/// Ties in `total_cranes` keep the earliest complete path in frontier order,
/// where east branches precede south branches.
#[derive(Debug, Clone, Copy)]
pub struct ExhaustiveSolver {
    parallel_threshold: usize,
}

impl Default for ExhaustiveSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ExhaustiveSolver {
    pub fn new() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Frontier length from which levels are expanded with rayon. Only
    /// consulted when the `parallel` feature is enabled.
    ///
    /// # Panics
    /// Panics if `threshold == 0`.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        assert!(threshold > 0, "parallel threshold must be positive");
        self.parallel_threshold = threshold;
        self
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    #[cfg(feature = "parallel")]
    fn expand<'g>(&self, open: &[Path<'g>]) -> Vec<Path<'g>> {
        if open.len() >= self.parallel_threshold {
            open.par_iter().flat_map_iter(|p| successors(p)).collect()
        } else {
            open.iter().flat_map(successors).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn expand<'g>(&self, open: &[Path<'g>]) -> Vec<Path<'g>> {
        open.iter().flat_map(successors).collect()
    }
}

impl CraneSolver for ExhaustiveSolver {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    /// # Panics
    /// Panics if `rows + columns - 2 >= 64`.
    fn solve<'g>(&self, grid: &'g Grid) -> Path<'g> {
        let max_steps = grid.path_len();
        assert!(
            max_steps < EXHAUSTIVE_STEP_LIMIT,
            "exhaustive search needs fewer than {EXHAUSTIVE_STEP_LIMIT} steps, grid requires {max_steps}"
        );

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "exhaustive_solve",
            rows = grid.rows(),
            columns = grid.columns()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut best = Path::new(grid);
        if !grid.get(0, 0).is_passable() {
            return best;
        }
        let mut frontier = vec![best.clone()];
        let path_bound = monotone_path_count(grid.rows(), grid.columns()).unwrap_or(u128::MAX);

        for level in 0..=max_steps {
            if best.is_complete() {
                break;
            }
            debug_assert!(frontier.iter().all(|p| p.len() == level));
            debug_assert!(frontier.len() as u128 <= path_bound);
            #[cfg(feature = "tracing")]
            tracing::trace!(level, frontier = frontier.len(), "draining level");

            let mut open = Vec::with_capacity(frontier.len());
            for path in frontier.drain(..) {
                if path.is_complete() {
                    // An origin-only `best` loses to any complete path.
                    if !best.is_complete() || path.total_cranes() > best.total_cranes() {
                        best = path;
                    }
                } else {
                    open.push(path);
                }
            }
            frontier = self.expand(&open);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            cranes = best.total_cranes(),
            complete = best.is_complete(),
            "exhaustive search finished"
        );

        best
    }
}

/// Valid one-step extensions of `path`, east first.
fn successors<'a, 'g>(path: &'a Path<'g>) -> impl Iterator<Item = Path<'g>> + 'a {
    StepDirection::ALL
        .into_iter()
        .filter(move |&direction| path.is_step_valid(direction))
        .map(move |direction| {
            let mut next = path.clone();
            next.add_step(direction);
            next
        })
}

/// Solve `grid` with the default [`ExhaustiveSolver`].
pub fn crane_unloading_exhaustive(grid: &Grid) -> Path<'_> {
    ExhaustiveSolver::new().solve(grid)
}
