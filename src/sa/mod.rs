//! Simulated Annealing (SA) search core for CVRP tours.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! The core pipeline: [`initial`] builds a randomized greedy starting tour,
//! [`neighbor`] perturbs the current tour with insert/swap/reversal moves,
//! and [`SaRunner`] drives the Metropolis loop under geometric cooling.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
pub mod initial;
pub mod neighbor;
mod runner;

pub use config::SaConfig;
pub use initial::{Construction, ConstructionStatus};
pub use neighbor::Neighbor;
pub use runner::{SaResult, SaRunner};
