//! Crane unloading solvers.
//!
//! Both implement [`CraneSolver`](crate::traits::CraneSolver) and agree on
//! the optimal crane count for every grid:
//! - [`exhaustive`] : breadth-first enumeration of every monotonic path.
//! - [`dyn_prog`]   : `O(rows × columns)` table fill plus backtrace.

pub mod dyn_prog;
pub mod exhaustive;

pub use dyn_prog::{crane_unloading_dyn_prog, DynProgSolver};
pub use exhaustive::{crane_unloading_exhaustive, ExhaustiveSolver};
