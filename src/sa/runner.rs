//! SA execution loop.

use super::config::SaConfig;
use super::initial::{self, ConstructionStatus};
use super::neighbor;
use crate::instance::Instance;
use crate::tour::{self, Tour};
use rand::Rng;

/// Result of one annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The tour held when the run converged.
    pub current: Tour,

    /// The best tour seen at any point of the run.
    pub best: Tour,

    /// The constructed starting tour.
    pub start: Tour,

    /// Cost of `current`.
    pub current_cost: f64,

    /// Cost of `best`.
    pub best_cost: f64,

    /// How construction of the starting tour went. The run proceeds
    /// best-effort even when this is not [`ConstructionStatus::Feasible`];
    /// callers decide whether such a run counts.
    pub construction: ConstructionStatus,

    /// Cost of the current tour after every inner iteration.
    pub cost_trace: Vec<f64>,

    /// Temperature of every completed cooling level.
    pub temperature_trace: Vec<f64>,
}

/// Executes the annealing loop: construct, then cool geometrically from
/// the initial to the terminal temperature, running a fixed batch of
/// Metropolis iterations at every level.
pub struct SaRunner;

impl SaRunner {
    /// Runs one annealing search on `instance`.
    ///
    /// Neighbor candidates that exhausted their retry bound without
    /// reaching capacity feasibility are skipped: the current tour stays,
    /// its cost is still recorded, and the loop moves on.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`SaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<R: Rng>(instance: &Instance, config: &SaConfig, rng: &mut R) -> SaResult {
        config.validate().expect("invalid SaConfig");

        let built = initial::construct(instance, config.construction_attempts, rng);
        let construction = built.status;
        let start = built.tour.clone();

        let mut current = built.tour;
        let mut current_cost = tour::cost(&current, instance);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut cost_trace = Vec::new();
        let mut temperature_trace = Vec::new();

        let mut temperature = config.initial_temperature;
        while temperature > config.min_temperature {
            for _ in 0..config.iterations_per_temperature {
                let candidate =
                    neighbor::generate(instance, &current, config.neighbor_attempts, rng);
                if candidate.feasible {
                    let candidate_cost = tour::cost(&candidate.tour, instance);
                    let delta = candidate_cost - current_cost;
                    if delta < 0.0 || metropolis(rng, delta, temperature) {
                        current = candidate.tour;
                        current_cost = candidate_cost;
                    }
                }

                cost_trace.push(current_cost);
                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            temperature_trace.push(temperature);
            temperature *= config.cooling_factor;
        }

        SaResult {
            current,
            best,
            start,
            current_cost,
            best_cost,
            construction,
            cost_trace,
            temperature_trace,
        }
    }
}

/// Metropolis criterion for a non-improving move: accept with probability
/// `exp(-delta / temperature)` against a fresh uniform draw.
pub(crate) fn metropolis<R: Rng>(rng: &mut R, delta: f64, temperature: f64) -> bool {
    rng.random::<f64>() < (-delta / temperature).exp()
}
