//! Tabu Search (TS) over real-valued vectors.
//!
//! A single-solution trajectory metaheuristic: at every iteration the best
//! admissible neighbor is taken, even when it is worse than the incumbent,
//! and the inverse of the move just taken is forbidden for a number of
//! iterations (the tenure). A forbidden move is still admissible when it
//! yields a new best value (aspiration).
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod neighborhood;
mod runner;
mod types;

pub use config::{NeighborPolicy, TabuConfig};
pub use memory::TabuMemory;
pub use neighborhood::evaluate_neighbors;
pub use runner::{RunResult, TabuRunner, Termination};
pub use types::{Bounds, Candidate, Fallible, Move, MoveKey, Objective, Solution};
