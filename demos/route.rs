//! Example: solve a small crane unloading grid with both solvers.
//!
//! Run with:
//! `cargo run --example route`
//! or pass a grid file in `.`/`X`/`c` notation:
//! `cargo run --example route -- my_grid.txt`

use std::{env, fs, process};

use crane_route::{CraneSolver, DynProgSolver, ExhaustiveSolver, Grid};

const DEMO_GRID: &str = "\
..c.X...
.X..c.c.
c..X....
..c..Xc.
.X...c..
...c...c
";

fn main() {
    let text = match env::args().nth(1) {
        Some(file) => match fs::read_to_string(&file) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("route: cannot read {file}: {err}");
                process::exit(2);
            }
        },
        None => DEMO_GRID.to_string(),
    };

    let grid: Grid = match text.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("route: {err}");
            process::exit(2);
        }
    };

    println!("Grid ({}x{}, {} cranes):", grid.rows(), grid.columns(), grid.crane_count());
    print!("{grid}");

    let mut solvers: Vec<Box<dyn CraneSolver>> = vec![Box::new(DynProgSolver)];
    // Exhaustive search is exponential; keep it to small grids.
    if grid.path_len() <= 24 {
        solvers.push(Box::new(ExhaustiveSolver::new()));
    }

    for solver in solvers {
        let path = solver.solve(&grid);
        println!();
        println!("{}: {path}", solver.name());
        if !path.is_complete() {
            println!("destination unreachable");
        }
        print!("{}", path.render());
    }
}
