//! Dynamic-programming solver.
//!
//! We fill a `(rows + 1) × (columns + 1)` table `T`, 1-indexed, whose border
//! row and column are fixed at 0. For a grid cell `(i - 1, j - 1)`:
//!
//! ```text
//! T[i][j] = -1                              if the cell is a building
//! T[1][1] = 1 + bonus(start)
//! T[i][j] = max(T[i-1][j], T[i][j-1]) + bonus   if that max >= 1
//! T[i][j] = -1                              otherwise (cut off from the origin)
//! ```
//!
//! The seed `1` only marks the start as reached, so every reachable cell
//! holds `cranes + 1 >= 1` and the border zeros can never be mistaken for a
//! reachable predecessor. The optimum is `T[rows][columns] - 1`.
//!
//! Reconstruction walks back from `(rows, columns)` to `(1, 1)`, preferring
//! the north predecessor (a forward `South` step) on ties, then replays the
//! reversed directions onto a fresh [`Path`].

use crate::grid::Grid;
use crate::path::{Path, StepDirection};
use crate::traits::CraneSolver;

/// Table marker for cells no building-free path reaches.
const UNREACHABLE: i64 = -1;

/// Dense, flat DP table with a zero border.
struct Table {
    width: usize,
    values: Vec<i64>,
}

impl Table {
    fn new(rows: usize, columns: usize) -> Self {
        let width = columns + 1;
        Self {
            width,
            values: vec![0; (rows + 1) * width],
        }
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> i64 {
        self.values[i * self.width + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: i64) {
        self.values[i * self.width + j] = value;
    }
}

/// `O(rows × columns)` solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynProgSolver;

impl DynProgSolver {
    pub fn new() -> Self {
        Self
    }

    /// Best achievable `total_cranes`, or `None` when the bottom-right cell
    /// is unreachable. Fills the table without reconstructing a path.
    pub fn optimum(&self, grid: &Grid) -> Option<u32> {
        let table = fill(grid);
        score_at(&table, grid.rows(), grid.columns())
    }
}

impl CraneSolver for DynProgSolver {
    fn name(&self) -> &'static str {
        "dyn_prog"
    }

    fn solve<'g>(&self, grid: &'g Grid) -> Path<'g> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "dyn_prog_solve",
            rows = grid.rows(),
            columns = grid.columns()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = {
            #[cfg(feature = "tracing")]
            let _fill = tracing::trace_span!("fill").entered();
            fill(grid)
        };

        let Some(best) = score_at(&table, grid.rows(), grid.columns()) else {
            #[cfg(feature = "tracing")]
            tracing::debug!("destination unreachable");
            return Path::new(grid);
        };

        let directions = {
            #[cfg(feature = "tracing")]
            let _backtrace = tracing::trace_span!("backtrace").entered();
            backtrace(&table, grid)
        };

        let mut path = Path::new(grid);
        for direction in directions {
            assert!(
                path.is_step_valid(direction),
                "backtrace produced an invalid {direction} step at ({}, {})",
                path.final_row(),
                path.final_column()
            );
            path.add_step(direction);
        }
        debug_assert!(path.is_complete());
        debug_assert_eq!(path.total_cranes(), best);

        #[cfg(feature = "tracing")]
        tracing::debug!(cranes = best, steps = path.len(), "dyn prog finished");

        path
    }
}

fn fill(grid: &Grid) -> Table {
    let rows = grid.rows();
    let columns = grid.columns();
    let mut table = Table::new(rows, columns);

    for i in 1..=rows {
        for j in 1..=columns {
            let cell = grid.get(i - 1, j - 1);
            let value = if !cell.is_passable() {
                UNREACHABLE
            } else if i == 1 && j == 1 {
                1 + i64::from(cell.bonus())
            } else {
                let reach = table.at(i - 1, j).max(table.at(i, j - 1));
                if reach >= 1 {
                    reach + i64::from(cell.bonus())
                } else {
                    UNREACHABLE
                }
            };
            table.set(i, j, value);
        }
    }

    table
}

fn score_at(table: &Table, i: usize, j: usize) -> Option<u32> {
    let value = table.at(i, j);
    (value >= 1).then(|| (value - 1) as u32)
}

/// Directions from `(1, 1)` to `(rows, columns)` in forward order. Expects a
/// reachable destination.
fn backtrace(table: &Table, grid: &Grid) -> Vec<StepDirection> {
    let max_steps = grid.path_len();
    let (mut x, mut y) = (grid.rows(), grid.columns());
    let mut reversed = Vec::with_capacity(max_steps);

    for _ in 0..max_steps {
        if x == 1 && y == 1 {
            break;
        }
        let north = if x > 1 { table.at(x - 1, y) } else { UNREACHABLE };
        let west = if y > 1 { table.at(x, y - 1) } else { UNREACHABLE };
        debug_assert!(
            north.max(west) >= 1,
            "reachable cell ({x}, {y}) has no reachable predecessor"
        );
        if north >= west {
            reversed.push(StepDirection::South);
            x -= 1;
        } else {
            reversed.push(StepDirection::East);
            y -= 1;
        }
    }
    debug_assert_eq!((x, y), (1, 1));

    reversed.reverse();
    reversed
}

/// Solve `grid` with [`DynProgSolver`].
pub fn crane_unloading_dyn_prog(grid: &Grid) -> Path<'_> {
    DynProgSolver.solve(grid)
}
