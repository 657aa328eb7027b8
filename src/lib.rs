//! Tabu search for continuous black-box minimization.
//!
//! - **Tabu Search (TS)**: single-trajectory local search over real-valued
//!   vectors with tenure-based short-term memory and an aspiration
//!   criterion. Neighborhoods are either deterministic (`±step` per axis)
//!   or randomized (uniform single-coordinate perturbations).
//! - **Experiments**: many independent, reproducibly seeded trajectories
//!   from random start points, optionally in parallel, with summary
//!   statistics over the per-run best values.
//! - **Benchmarks**: standard test landscapes (Sphere, Rastrigin, Ackley,
//!   Rosenbrock, ...) and a table of tuned experiment parameters.
//!
//! # Architecture
//!
//! The search engine knows nothing about experiments: an objective is any
//! [`tabu::Objective`], a start point is a slice of `f64`, and each call
//! returns one [`tabu::RunResult`]. The experiment layer only draws start
//! points, seeds RNGs and aggregates.

pub mod benchmarks;
pub mod error;
pub mod experiment;
pub mod stats;
pub mod tabu;

pub use error::{Result, TabuError};
