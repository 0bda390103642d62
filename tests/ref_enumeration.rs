use crane_route::{CellKind, CraneSolver, DynProgSolver, ExhaustiveSolver, Grid, Path};
use proptest::prelude::*;

/// Depth-first reference: best crane count over all building-free monotonic
/// paths from `(row, col)` to the bottom-right cell, or `None` if stuck.
fn best_from(grid: &Grid, row: usize, col: usize) -> Option<u32> {
    let cell = grid.try_get(row, col)?;
    if !cell.is_passable() {
        return None;
    }
    let here = cell.bonus();
    if row + 1 == grid.rows() && col + 1 == grid.columns() {
        return Some(here);
    }
    let east = best_from(grid, row, col + 1);
    let south = best_from(grid, row + 1, col);
    east.max(south).map(|rest| rest + here)
}

fn recount(path: &Path<'_>) -> u32 {
    path.cells()
        .map(|(r, c)| path.grid().get(r, c).bonus())
        .sum()
}

fn cell_kind() -> impl Strategy<Value = CellKind> {
    prop_oneof![
        5 => Just(CellKind::Open),
        1 => Just(CellKind::Building),
        3 => Just(CellKind::Crane),
    ]
}

fn small_grid() -> impl Strategy<Value = Grid> {
    (1usize..=6, 1usize..=6).prop_flat_map(|(rows, columns)| {
        proptest::collection::vec(cell_kind(), rows * columns)
            .prop_map(move |cells| Grid::from_cells(rows, columns, cells).unwrap())
    })
}

proptest! {
    #[test]
    fn exhaustive_matches_reference(grid in small_grid()) {
        let path = ExhaustiveSolver::new().solve(&grid);
        match best_from(&grid, 0, 0) {
            Some(best) => {
                prop_assert!(path.is_complete());
                prop_assert_eq!(path.total_cranes(), best);
            }
            None => prop_assert!(path.is_empty()),
        }
    }

    #[test]
    fn dyn_prog_matches_reference(grid in small_grid()) {
        let path = DynProgSolver.solve(&grid);
        let best = best_from(&grid, 0, 0);
        prop_assert_eq!(DynProgSolver.optimum(&grid), best);
        match best {
            Some(best) => {
                prop_assert!(path.is_complete());
                prop_assert_eq!(path.total_cranes(), best);
            }
            None => prop_assert!(path.is_empty()),
        }
    }

    #[test]
    fn solvers_agree(grid in small_grid()) {
        let a = ExhaustiveSolver::new().solve(&grid);
        let b = DynProgSolver.solve(&grid);
        prop_assert_eq!(a.total_cranes(), b.total_cranes());
        prop_assert_eq!(a.is_complete(), b.is_complete());
        prop_assert_eq!(a.len(), b.len());
    }

    #[test]
    fn reported_score_matches_visited_cells(grid in small_grid()) {
        for path in [ExhaustiveSolver::new().solve(&grid), DynProgSolver.solve(&grid)] {
            prop_assert_eq!(path.total_cranes(), recount(&path));
        }
    }
}
