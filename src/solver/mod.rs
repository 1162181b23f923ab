//! Search drivers above the annealing core.
//!
//! [`MultistartDriver`] repeats annealing from fresh starting tours and
//! keeps the best repetition. [`ParallelSolver`] fans a multistart driver
//! out over independent worker threads — each on its own deep copy of the
//! instance — and merges the per-worker results into one [`Summary`].

mod config;
mod multistart;
mod orchestrator;

pub use config::SolverConfig;
pub use multistart::{MultistartDriver, MultistartResult};
pub use orchestrator::{ParallelSolver, Summary, WorkerFailure};

use crate::sa::ConstructionStatus;

/// Merge ordering for run results: a run whose construction was fully
/// feasible beats any best-effort run regardless of cost (an incomplete
/// tour visits fewer customers and would otherwise win on artificially
/// short distance); among equals, lower cost wins.
pub(crate) fn improves(
    status: ConstructionStatus,
    cost: f64,
    incumbent_status: ConstructionStatus,
    incumbent_cost: f64,
) -> bool {
    match (status.is_feasible(), incumbent_status.is_feasible()) {
        (true, false) => true,
        (false, true) => false,
        _ => cost < incumbent_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improves_prefers_feasible_over_cheaper_incomplete() {
        let incomplete = ConstructionStatus::Incomplete { unassigned: 1 };
        assert!(improves(ConstructionStatus::Feasible, 100.0, incomplete, 10.0));
        assert!(!improves(incomplete, 10.0, ConstructionStatus::Feasible, 100.0));
    }

    #[test]
    fn test_improves_on_cost_within_same_class() {
        let feasible = ConstructionStatus::Feasible;
        assert!(improves(feasible, 10.0, feasible, 11.0));
        assert!(!improves(feasible, 11.0, feasible, 10.0));
        assert!(!improves(feasible, 10.0, feasible, 10.0));
    }

    #[test]
    fn test_improves_against_initial_sentinel() {
        assert!(improves(
            ConstructionStatus::Incomplete { unassigned: 2 },
            42.0,
            ConstructionStatus::Infeasible,
            f64::INFINITY,
        ));
    }
}
