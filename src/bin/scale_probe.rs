use std::env;
use std::time::Instant;

use crane_route::{CellKind, CraneSolver, DynProgSolver, ExhaustiveSolver, Grid, Path};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Crane Route Scaling Probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("  • exhaustive_vs_dyn_prog: both solvers on small grids, crane counts must agree");
    eprintln!(
        "    (grids with up to {} steps are checked)",
        options.verify_limit
    );
    eprintln!("  • dyn_prog: table solver on large grids, path checked against the table optimum");
    eprintln!("  • wall_s: wall-clock seconds, rss_delta_kib: resident memory growth");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Exhaustive vs dynamic programming...");
    measurements.extend(run_agreement(&options, &mut sys));
    eprintln!();

    eprintln!("[2/2] Dynamic programming at scale...");
    measurements.extend(run_dyn_prog(&options, &mut sys));
    eprintln!();

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    max_side: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 18usize;
        let mut max_side = 4096usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = next_value(&mut args, "--format")?;
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_usize(value, "verify limit")?;
            } else if arg == "--verify-limit" {
                let value = next_value(&mut args, "--verify-limit")?;
                verify_limit = parse_usize(&value, "verify limit")?;
            } else if let Some(value) = arg.strip_prefix("--max-side=") {
                max_side = parse_usize(value, "max side")?;
            } else if arg == "--max-side" {
                let value = next_value(&mut args, "--max-side")?;
                max_side = parse_usize(&value, "max side")?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        if verify_limit >= crane_route::utils::EXHAUSTIVE_STEP_LIMIT {
            return Err(format!(
                "verify limit must be below {}",
                crane_route::utils::EXHAUSTIVE_STEP_LIMIT
            ));
        }

        Ok(Self {
            format,
            verify_limit,
            max_side,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Longest path (steps) solved exhaustively for agreement checks (default: 18, max: 63)
  --max-side <N>                Largest square grid side for the dynamic-programming sweep (default: 4096)
  -h, --help                    Print this help message

Examples:
  cargo run --bin scale_probe
  cargo run --release --bin scale_probe -- --format table --max-side 8192
"
        );
    }
}

fn next_value<I, T>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    args.next()
        .map(Into::into)
        .ok_or_else(|| format!("missing value after {flag}"))
}

fn parse_usize(value: &str, what: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{what} must be a positive integer"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_agreement(options: &Options, sys: &mut System) -> Vec<Measurement> {
    // Square sides whose paths fit the exhaustive limit.
    let sides: Vec<usize> = (2..=32)
        .filter(|&side| 2 * side - 2 <= options.verify_limit)
        .collect();
    let total = sides.len();
    sides
        .iter()
        .enumerate()
        .map(|(idx, &side)| {
            eprint!("      [{}/{}] side {}... ", idx + 1, total, side);
            let grid = deterministic_grid(side, side, 7);
            let bound = crane_route::utils::monotone_path_count(side, side).unwrap_or(u128::MAX);
            let mut cranes = 0u32;
            let m = measure("exhaustive_vs_dyn_prog", format!("side={side}"), sys, || {
                let exhaustive = ExhaustiveSolver::new().solve(&grid);
                let dyn_prog = DynProgSolver.solve(&grid);
                cranes = exhaustive.total_cranes();
                if exhaustive.total_cranes() == dyn_prog.total_cranes()
                    && exhaustive.is_complete() == dyn_prog.is_complete()
                {
                    (VerificationStatus::Passed, None)
                } else {
                    (
                        VerificationStatus::Failed,
                        Some(format!(
                            "exhaustive {}, dyn_prog {}",
                            exhaustive.total_cranes(),
                            dyn_prog.total_cranes()
                        )),
                    )
                }
            });
            eprintln!(
                "{} cranes={}, paths<={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                cranes,
                bound,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn run_dyn_prog(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIDES: &[usize] = &[64, 128, 256, 512, 1024, 2048, 4096, 8192];
    // Verification refills the table; skip it where that doubles peak memory.
    const VERIFY_MAX_SIDE: usize = 4096;
    let sides: Vec<usize> = SIDES
        .iter()
        .copied()
        .filter(|&side| side <= options.max_side)
        .collect();
    let total = sides.len();
    sides
        .iter()
        .enumerate()
        .map(|(idx, &side)| {
            eprint!("      [{}/{}] side {}... ", idx + 1, total, side);
            let grid = deterministic_grid(side, side, 11);
            let mut cranes = 0u32;
            let mut steps = 0usize;
            let m = measure("dyn_prog", format!("side={side}"), sys, || {
                let path = DynProgSolver.solve(&grid);
                cranes = path.total_cranes();
                steps = path.len();
                if side <= VERIFY_MAX_SIDE {
                    verify_against_table(&grid, &path)
                } else {
                    (VerificationStatus::NotChecked, None)
                }
            });
            eprintln!(
                "{} cranes={}, steps={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                cranes,
                steps,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn verify_against_table(grid: &Grid, path: &Path<'_>) -> (VerificationStatus, Option<String>) {
    let recounted: u32 = path.cells().map(|(r, c)| grid.get(r, c).bonus()).sum();
    match DynProgSolver.optimum(grid) {
        Some(best) if path.is_complete() && best == recounted => (VerificationStatus::Passed, None),
        None if path.is_empty() => (VerificationStatus::Passed, None),
        expected => (
            VerificationStatus::Failed,
            Some(format!("expected {expected:?}, path scored {recounted}")),
        ),
    }
}

fn print_summary(measurements: &[Measurement]) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }
    eprintln!("  Total: {}", measurements.len());
    eprintln!("  ✓ Passed: {passed}");
    eprintln!("  ✗ Failed: {failed}");
    eprintln!("  ○ Not checked: {not_checked}");

    if failed > 0 {
        eprintln!();
        eprintln!("Failed runs:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {detail}");
                }
            }
        }
    }

    for scenario in ["exhaustive_vs_dyn_prog", "dyn_prog"] {
        let ms: Vec<&Measurement> = measurements
            .iter()
            .filter(|m| m.scenario == scenario)
            .collect();
        if ms.is_empty() {
            continue;
        }
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!();
        eprintln!("  {scenario}: runs={}, max_time={max_time:.3}s, max_rss_delta={max_mem} KiB", ms.len());
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .max()
        .unwrap_or(0)
        .max("scenario".len());
    let col2 = measurements
        .iter()
        .map(|m| m.size_desc.len())
        .max()
        .unwrap_or(0)
        .max("size".len());

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>14}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "status",
    );
    println!("{:-<col1$}  {:-<col2$}  {:-<12}  {:-<14}  {:-<12}  {:-<12}", "", "", "", "", "", "");
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Reproducible grid: roughly 8% buildings and 25% cranes, origin and
/// destination kept open.
fn deterministic_grid(rows: usize, columns: usize, seed: u64) -> Grid {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    Grid::from_fn(rows, columns, |r, c| {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        if (r, c) == (0, 0) || (r + 1, c + 1) == (rows, columns) {
            return CellKind::Open;
        }
        match state % 100 {
            0..=7 => CellKind::Building,
            8..=32 => CellKind::Crane,
            _ => CellKind::Open,
        }
    })
}
