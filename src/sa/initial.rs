//! Randomized greedy construction of a starting tour.

use crate::instance::Instance;
use crate::tour::{self, Tour};
use rand::seq::SliceRandom;
use rand::Rng;

/// Outcome classification of one construction.
///
/// Completeness and capacity feasibility are separate conditions: first-fit
/// never overfills a route, so the realistic failure mode is a customer
/// that fits in no remaining route and gets left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstructionStatus {
    /// Capacity-feasible and every customer assigned.
    Feasible,
    /// Capacity-feasible, but some customers fit in no route.
    Incomplete { unassigned: usize },
    /// The capacity scan itself failed.
    Infeasible,
}

impl ConstructionStatus {
    pub fn is_feasible(&self) -> bool {
        matches!(self, ConstructionStatus::Feasible)
    }
}

/// A constructed starting tour with its explicit status.
#[derive(Debug, Clone)]
pub struct Construction {
    pub tour: Tour,
    pub status: ConstructionStatus,
}

/// Builds a starting tour: shuffle the customer set, pack customers
/// first-fit into the K routes in route order, flatten with depot
/// separators, and check the result.
///
/// Retries up to `attempts` times and returns at the first tour that is
/// both capacity-feasible and complete. Exhaustion returns the last
/// attempt, best-effort — callers decide what an incomplete start means
/// for them; construction itself never fails hard.
pub fn construct<R: Rng>(instance: &Instance, attempts: usize, rng: &mut R) -> Construction {
    let vehicles = instance.vehicles();
    let mut ids: Vec<usize> = instance.customer_ids().collect();
    let mut last = Construction {
        tour: Tour::empty(),
        status: ConstructionStatus::Infeasible,
    };

    for _ in 0..attempts {
        ids.shuffle(rng);

        let mut remaining = vec![instance.capacity(); vehicles];
        let mut routes: Vec<Vec<usize>> = vec![Vec::new(); vehicles];
        let mut unassigned = 0usize;
        for &id in &ids {
            let demand = instance.customer(id).demand;
            match remaining.iter().position(|&room| room >= demand) {
                Some(k) => {
                    remaining[k] -= demand;
                    routes[k].push(id);
                }
                None => unassigned += 1,
            }
        }

        let mut stops = Vec::with_capacity(ids.len() + vehicles + 1);
        for route in &routes {
            stops.push(0);
            stops.extend_from_slice(route);
        }
        stops.push(0);
        let candidate = Tour::new(stops);

        let status = if !tour::is_feasible(&candidate, instance) {
            ConstructionStatus::Infeasible
        } else if unassigned > 0 {
            ConstructionStatus::Incomplete { unassigned }
        } else {
            ConstructionStatus::Feasible
        };

        last = Construction {
            tour: candidate,
            status,
        };
        if last.status.is_feasible() {
            return last;
        }
    }

    tracing::warn!(
        attempts,
        status = ?last.status,
        "construction exhausted its attempts, proceeding best-effort"
    );
    last
}
