#![cfg(feature = "heavy")]
use crane_route::{CellKind, CraneSolver, DynProgSolver, ExhaustiveSolver, Grid};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, rows: usize, columns: usize) -> Grid {
    Grid::from_fn(rows, columns, |_, _| match rng.gen_range(0..10) {
        0 => CellKind::Building,
        1..=3 => CellKind::Crane,
        _ => CellKind::Open,
    })
}

#[test]
fn heavy_dyn_prog_large_grid() {
    let mut rng = StdRng::seed_from_u64(123);
    let grid = random_grid(&mut rng, 2_000, 2_000);
    let path = DynProgSolver.solve(&grid);
    if path.is_complete() {
        assert_eq!(path.len(), 3_998);
    } else {
        assert!(path.is_empty());
    }
    assert!(path.total_cranes() as usize <= 3_999);
}

#[test]
fn heavy_exhaustive_agreement_medium_grids() {
    let mut rng = StdRng::seed_from_u64(321);
    for _ in 0..20 {
        let grid = random_grid(&mut rng, 9, 10);
        let a = ExhaustiveSolver::new().solve(&grid);
        let b = DynProgSolver.solve(&grid);
        assert_eq!(a.total_cranes(), b.total_cranes(), "\n{grid}");
    }
}
