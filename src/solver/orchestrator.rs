//! Parallel search orchestration.
//!
//! Workers are embarrassingly parallel: each owns a deep copy of the
//! instance and a derived seed, runs a complete multi-start search to
//! convergence, and hands its result back through its own join handle —
//! an exclusive slot per worker, never a shared mutable collection. The
//! orchestrator blocks on the full join barrier, then aggregates
//! sequentially.

use super::{improves, MultistartDriver, MultistartResult, SolverConfig};
use crate::error::{Error, Result};
use crate::instance::Instance;
use crate::sa::{ConstructionStatus, SaConfig};
use crate::tour::Tour;
use std::any::Any;
use std::thread;
use std::time::Duration;

/// A worker that died instead of producing a result.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkerFailure {
    pub worker: usize,
    pub message: String,
}

/// Merged outcome of one parallel solve, handed to the reporter.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Instance name.
    pub name: String,

    /// Fleet size K.
    pub vehicles: usize,

    /// Vehicle capacity Q.
    pub capacity: u32,

    /// Best known cost of the instance, if any.
    pub best_known: Option<f64>,

    /// Best cost over all workers.
    pub best_cost: f64,

    /// Construction status of the winning run.
    pub construction: ConstructionStatus,

    /// Every worker's per-repetition best costs, concatenated in worker
    /// order; the sample set for mean/variance reporting.
    pub samples: Vec<f64>,

    /// Total compute time: the sum of all workers' elapsed durations.
    pub total_duration: Duration,

    /// Final current tour of the winning run.
    pub current: Tour,

    /// Best tour of the winning run.
    pub best: Tour,

    /// Starting tour of the winning run.
    pub start: Tour,

    /// Cost trace of the winning run.
    pub cost_trace: Vec<f64>,

    /// Temperature trace of the winning run.
    pub temperature_trace: Vec<f64>,

    /// Workers that panicked instead of finishing.
    pub failures: Vec<WorkerFailure>,
}

/// Runs independent multi-start searches concurrently and merges their
/// results.
pub struct ParallelSolver;

impl ParallelSolver {
    /// Solves `instance` with `config.workers` concurrent workers.
    ///
    /// A panicking worker is recorded in [`Summary::failures`] and does
    /// not disturb the others; only the loss of every worker is an error.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`SolverConfig::validate`] first to get a descriptive error).
    pub fn solve(instance: &Instance, config: &SolverConfig) -> Result<Summary> {
        config.validate().expect("invalid SolverConfig");

        let outcomes: Vec<thread::Result<MultistartResult>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..config.workers)
                .map(|worker| {
                    let worker_instance = instance.clone();
                    let sa = worker_config(&config.sa, worker);
                    let multistarts = config.multistarts;
                    scope.spawn(move || {
                        MultistartDriver::run(&worker_instance, &sa, multistarts)
                    })
                })
                .collect();
            handles.into_iter().map(|handle| handle.join()).collect()
        });

        let mut samples = Vec::with_capacity(config.workers * config.multistarts);
        let mut total_duration = Duration::ZERO;
        let mut failures = Vec::new();
        let mut winner: Option<MultistartResult> = None;

        for (worker, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(result) => {
                    samples.extend_from_slice(&result.multistart_costs);
                    total_duration += result.elapsed;
                    let better = match &winner {
                        Some(incumbent) => improves(
                            result.construction,
                            result.best_cost,
                            incumbent.construction,
                            incumbent.best_cost,
                        ),
                        None => true,
                    };
                    if better {
                        winner = Some(result);
                    }
                }
                Err(payload) => {
                    let message = panic_message(payload);
                    tracing::error!(worker, %message, "search worker panicked");
                    failures.push(WorkerFailure { worker, message });
                }
            }
        }

        let winner = winner.ok_or(Error::AllWorkersFailed {
            workers: config.workers,
        })?;

        Ok(Summary {
            name: instance.name().to_string(),
            vehicles: instance.vehicles(),
            capacity: instance.capacity(),
            best_known: instance.best_known(),
            best_cost: winner.best_cost,
            construction: winner.construction,
            samples,
            total_duration,
            current: winner.current,
            best: winner.best,
            start: winner.start,
            cost_trace: winner.cost_trace,
            temperature_trace: winner.temperature_trace,
            failures,
        })
    }
}

/// Derives one worker's annealing parameters: the base seed offset by the
/// worker index, so seeded solves are reproducible without the workers
/// searching in lockstep.
fn worker_config(base: &SaConfig, worker: usize) -> SaConfig {
    let mut config = base.clone();
    config.seed = base.seed.map(|seed| seed.wrapping_add(worker as u64));
    config
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
