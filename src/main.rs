//! CLI entry point: solve every `.vrp` instance in a directory and write
//! one report file per instance.

use anyhow::{bail, Context};
use clap::Parser;
use cvrp_anneal::instance::loader;
use cvrp_anneal::report;
use cvrp_anneal::solver::{ParallelSolver, SolverConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// Directory containing `.vrp` instance files
    #[arg(short, long)]
    data: PathBuf,

    /// Output directory for result files
    #[arg(short, long, default_value = "solutions")]
    out: PathBuf,

    /// Number of parallel search workers
    #[arg(short, long, default_value_t = 10)]
    workers: usize,

    /// Annealing repetitions per worker
    #[arg(short, long, default_value_t = 10)]
    multistarts: usize,

    /// Base RNG seed; omit for entropy seeding
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = SolverConfig::default()
        .with_workers(args.workers)
        .with_multistarts(args.multistarts);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Err(message) = config.validate() {
        bail!("invalid configuration: {message}");
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(&args.data)
        .with_context(|| format!("reading instance directory {}", args.data.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "vrp"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        bail!("no .vrp files found in {}", args.data.display());
    }

    for path in paths {
        tracing::info!("solving {}", path.display());
        let instance = loader::load(&path)
            .with_context(|| format!("loading instance {}", path.display()))?;
        let summary = ParallelSolver::solve(&instance, &config)?;
        let report_path = report::write(&summary, &args.out)?;
        tracing::info!(
            best_cost = summary.best_cost,
            "wrote {}",
            report_path.display()
        );
    }

    Ok(())
}
