//! Multi-start simulated annealing for the capacitated vehicle routing
//! problem (CVRP).
//!
//! Partitions a set of customers with demand into capacity-bounded vehicle
//! routes starting and ending at a single depot, minimizing total Euclidean
//! travel distance:
//!
//! - **Instance**: immutable customer registry plus fleet size and vehicle
//!   capacity, loaded from a TSPLIB-like text format.
//! - **Tour**: all routes flattened into one id sequence with depot
//!   separators; one shared capacity-feasibility scan and one pure cost
//!   function.
//! - **SA**: randomized greedy construction, insert/swap/reversal
//!   neighborhood, Metropolis acceptance under geometric cooling.
//! - **Solver**: multi-start repetition per worker, and a parallel
//!   orchestrator running independent workers on exclusive instance copies.
//! - **Report**: cost statistics and per-instance result files.
//!
//! # Architecture
//!
//! Data flows one way: the instance registry is read-only input to
//! feasibility and cost evaluation; construction, neighborhood and the
//! annealing loop own their per-run solution state; the multi-start driver
//! aggregates per-run bests and the orchestrator merges per-worker results
//! into a single summary. Workers never share mutable state.

pub mod error;
pub mod instance;
pub mod report;
pub mod sa;
pub mod solver;
pub mod tour;

pub use error::{Error, Result};
