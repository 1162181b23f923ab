//! CVRP instance model: customer registry, fleet metadata, file loading.
//!
//! An [`Instance`] is immutable after load. The solver deep-copies it once
//! per parallel worker, so nothing in this module carries run state.

pub mod loader;
mod types;

pub use types::{Customer, Instance};
