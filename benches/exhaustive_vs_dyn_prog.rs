//! Benchmark: both solvers on grids small enough for exhaustive search.
//!
//! Run with:
//! `cargo bench --bench exhaustive_vs_dyn_prog`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use crane_route::{CellKind, CraneSolver, DynProgSolver, ExhaustiveSolver, Grid};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, side: usize) -> Grid {
    Grid::from_fn(side, side, |_, _| match rng.gen_range(0..10) {
        0 => CellKind::Building,
        1..=3 => CellKind::Crane,
        _ => CellKind::Open,
    })
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("small_square");
    let solvers: [&dyn CraneSolver; 2] = [&ExhaustiveSolver::new(), &DynProgSolver];
    for &side in &[4usize, 6, 8, 10] {
        let mut rng = StdRng::seed_from_u64(side as u64);
        let grid = random_grid(&mut rng, side);
        for solver in solvers {
            group.bench_with_input(BenchmarkId::new(solver.name(), side), &grid, |b, grid| {
                b.iter(|| criterion::black_box(solver.solve(grid).total_cranes()))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
