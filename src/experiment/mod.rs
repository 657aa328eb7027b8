//! Multi-run experiments.
//!
//! Runs many independent Tabu Search trajectories from start points drawn
//! uniformly from the bounds, keeps the overall best, and summarises the
//! per-run best values.

mod config;
mod runner;

pub use config::ExperimentConfig;
pub use runner::{ExperimentResult, ExperimentRunner};
