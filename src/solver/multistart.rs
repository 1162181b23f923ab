//! Multi-start repetition of the annealing core.

use super::improves;
use crate::instance::Instance;
use crate::sa::{ConstructionStatus, SaConfig, SaRunner};
use crate::tour::Tour;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Result of one multi-start search: the best repetition's tours and
/// traces, plus the per-repetition cost samples.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultistartResult {
    /// Best cost over all repetitions.
    pub best_cost: f64,

    /// Wall-clock time across all repetitions.
    pub elapsed: Duration,

    /// Each repetition's best-known cost, in repetition order.
    pub multistart_costs: Vec<f64>,

    /// Final current tour of the winning repetition.
    pub current: Tour,

    /// Best tour of the winning repetition.
    pub best: Tour,

    /// Starting tour of the winning repetition.
    pub start: Tour,

    /// Construction status of the winning repetition.
    pub construction: ConstructionStatus,

    /// Cost trace of the winning repetition.
    pub cost_trace: Vec<f64>,

    /// Temperature trace of the winning repetition.
    pub temperature_trace: Vec<f64>,
}

/// Repeats the annealing core from fresh starting tours, keeping the best.
pub struct MultistartDriver;

impl MultistartDriver {
    /// Runs `num_multistarts` annealing repetitions, seeding the RNG from
    /// the configuration (or entropy when unseeded).
    pub fn run(instance: &Instance, config: &SaConfig, num_multistarts: usize) -> MultistartResult {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(instance, config, num_multistarts, &mut rng)
    }

    /// Runs with a caller-provided RNG. The RNG threads through every
    /// repetition, so repetitions differ even under a fixed seed.
    pub fn run_with_rng<R: Rng>(
        instance: &Instance,
        config: &SaConfig,
        num_multistarts: usize,
        rng: &mut R,
    ) -> MultistartResult {
        let started = Instant::now();
        let mut result = MultistartResult {
            best_cost: f64::INFINITY,
            elapsed: Duration::ZERO,
            multistart_costs: Vec::with_capacity(num_multistarts),
            current: Tour::empty(),
            best: Tour::empty(),
            start: Tour::empty(),
            construction: ConstructionStatus::Infeasible,
            cost_trace: Vec::new(),
            temperature_trace: Vec::new(),
        };

        for repetition in 0..num_multistarts {
            let run = SaRunner::run(instance, config, rng);
            tracing::debug!(
                repetition,
                best_cost = run.best_cost,
                status = ?run.construction,
                "multistart repetition finished"
            );

            result.multistart_costs.push(run.best_cost);
            if improves(
                run.construction,
                run.best_cost,
                result.construction,
                result.best_cost,
            ) {
                result.best_cost = run.best_cost;
                result.current = run.current;
                result.best = run.best;
                result.start = run.start;
                result.construction = run.construction;
                result.cost_trace = run.cost_trace;
                result.temperature_trace = run.temperature_trace;
            }
        }

        result.elapsed = started.elapsed();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Customer;
    use crate::tour::{self, Tour};

    fn square_instance() -> Instance {
        // depot at the origin, three customers on a short arc; K = 1,
        // demands 3 + 4 + 3 fit the single vehicle exactly
        let registry = vec![
            Customer { id: 0, x: 0.0, y: 0.0, demand: 0 },
            Customer { id: 1, x: 0.0, y: 4.0, demand: 3 },
            Customer { id: 2, x: 3.0, y: 4.0, demand: 4 },
            Customer { id: 3, x: 3.0, y: 0.0, demand: 3 },
        ];
        Instance::new("square", "", 1, 10, None, registry).unwrap()
    }

    fn fast_config() -> SaConfig {
        SaConfig::default()
            .with_initial_temperature(50.0)
            .with_min_temperature(1.0)
            .with_cooling_factor(0.8)
            .with_iterations_per_temperature(10)
            .with_seed(42)
    }

    #[test]
    fn test_records_one_sample_per_repetition() {
        let instance = square_instance();
        let result = MultistartDriver::run(&instance, &fast_config(), 5);

        assert_eq!(result.multistart_costs.len(), 5);
        let min = result
            .multistart_costs
            .iter()
            .cloned()
            .fold(f64::INFINITY, f64::min);
        assert!((result.best_cost - min).abs() < 1e-9);
        assert!((result.best_cost - tour::cost(&result.best, &instance)).abs() < 1e-9);
    }

    #[test]
    fn test_fifty_multistarts_beat_insertion_order() {
        let instance = square_instance();
        let result = MultistartDriver::run(&instance, &fast_config(), 50);

        assert!(result.construction.is_feasible());
        assert!(tour::is_complete(&result.best, &instance));
        let insertion_order = Tour::new(vec![0, 1, 2, 3, 0]);
        let bound = tour::cost(&insertion_order, &instance);
        assert!(
            result.best_cost <= bound + 1e-9,
            "best {} above insertion-order bound {}",
            result.best_cost,
            bound
        );
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let instance = square_instance();
        let a = MultistartDriver::run(&instance, &fast_config(), 3);
        let b = MultistartDriver::run(&instance, &fast_config(), 3);

        assert_eq!(a.multistart_costs, b.multistart_costs);
        assert_eq!(a.best, b.best);
        assert_eq!(a.start, b.start);
    }

    #[test]
    fn test_elapsed_covers_all_repetitions() {
        let instance = square_instance();
        let result = MultistartDriver::run(&instance, &fast_config(), 2);
        assert!(result.elapsed > Duration::ZERO);
    }
}
