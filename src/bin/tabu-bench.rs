//! Runs the benchmark suite and prints a plain-text result table.
//!
//! ```text
//! tabu-bench [--seed N] [--parallel] [--out FILE] [FUNCTION ...]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::error::Error;
use std::fmt::Write as _;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;
use u_tabu::benchmarks::{suite, BenchmarkCase, BenchmarkFn};
use u_tabu::experiment::{ExperimentResult, ExperimentRunner};

struct Cli {
    seed: Option<u64>,
    parallel: bool,
    out: Option<PathBuf>,
    functions: Vec<BenchmarkFn>,
}

fn parse_cli() -> Result<Cli, Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let mut cli = Cli {
        seed: None,
        parallel: false,
        out: None,
        functions: Vec::new(),
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                cli.seed = Some(value.parse()?);
            }
            "--parallel" => cli.parallel = true,
            "--out" => cli.out = Some(args.next().ok_or("--out needs a path")?.into()),
            name => cli.functions.push(name.parse()?),
        }
    }
    Ok(cli)
}

fn enable_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn write_result(out: &mut String, case: &BenchmarkCase, result: &ExperimentResult) -> std::fmt::Result {
    writeln!(
        out,
        "{} (runs={}, neighbors={}, tenure={}, max_iter={}, bounds=({}, {}), dims={})",
        case.function,
        case.num_runs,
        case.neighbors,
        case.tenure,
        case.max_iterations,
        case.bounds.low,
        case.bounds.high,
        case.dimensions
    )?;
    writeln!(out, "  Best x:   {:?}", result.best_solution)?;
    writeln!(out, "  Best f:   {:.6e}", result.best_value)?;
    writeln!(out, "  Avg f:    {:.6e}", result.summary.mean)?;
    writeln!(out, "  Median f: {:.6e}", result.summary.median)?;
    writeln!(out, "  Max f:    {:.6e}", result.summary.max)?;
    writeln!(out, "  Std f:    {:.6e}", result.summary.std_dev)?;
    writeln!(out, "  Seed:     {}", result.base_seed)?;
    writeln!(out)
}

fn main() -> Result<(), Box<dyn Error>> {
    enable_tracing();
    let cli = parse_cli()?;

    let cases: Vec<BenchmarkCase> = suite()
        .into_iter()
        .filter(|c| cli.functions.is_empty() || cli.functions.contains(&c.function))
        .collect();

    let mut report = String::new();
    writeln!(report, "Tabu Search Results")?;
    writeln!(report, "{}", "=".repeat(60))?;
    writeln!(report)?;

    for case in &cases {
        info!(function = %case.function, "running");
        let mut config = case.to_experiment().with_parallel(cli.parallel);
        config.seed = cli.seed;
        let result = ExperimentRunner::run(&case.function, &config)?;
        write_result(&mut report, case, &result)?;
    }

    match &cli.out {
        Some(path) => {
            std::fs::write(path, &report)?;
            info!(path = %path.display(), "results saved");
        }
        None => print!("{report}"),
    }
    Ok(())
}
