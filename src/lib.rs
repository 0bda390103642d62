//! Crane unloading routes
//!
//! Given a rectangular grid of open cells, buildings and cranes, find a
//! monotonic route (east or south, one cell at a time) from the top-left to
//! the bottom-right cell that visits as many cranes as possible without ever
//! entering a building.
//!
//! ## Solvers
//! - [`ExhaustiveSolver`]: level-by-level enumeration of every monotonic
//!   path. Exponential; limited to routes shorter than 64 steps.
//! - [`DynProgSolver`]: table fill in `O(rows × columns)` followed by a
//!   backtrace.
//!
//! Both implement [`CraneSolver`] and always return the same crane count.
//! When the destination is unreachable both return the empty path at the
//! origin.
//!
//! ## Quick start
//! ```
//! use crane_route::{CraneSolver, DynProgSolver, ExhaustiveSolver, Grid};
//!
//! let grid: Grid = ".c\nc.".parse().unwrap();
//! let fast = DynProgSolver.solve(&grid);
//! let slow = ExhaustiveSolver::new().solve(&grid);
//! assert_eq!(fast.total_cranes(), 1);
//! assert_eq!(fast.total_cranes(), slow.total_cranes());
//! assert!(fast.is_complete());
//! ```
//!
//! ## Features
//! - `parallel`: expand large exhaustive levels with rayon.
//! - `tracing`: emit spans and events from the solvers.

pub mod builder;
pub mod grid;
pub mod path;
pub mod solvers;
pub mod traits;
pub mod utils;

pub use crate::builder::GridBuilder;
pub use crate::grid::{CellKind, Grid, GridError};
pub use crate::path::{Path, StepDirection};
pub use crate::solvers::{
    crane_unloading_dyn_prog, crane_unloading_exhaustive, DynProgSolver, ExhaustiveSolver,
};
pub use crate::traits::CraneSolver;
