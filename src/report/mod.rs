//! Result statistics and per-instance report files.

mod stats;
mod writer;

pub use stats::SampleStats;
pub use writer::{render, write};
