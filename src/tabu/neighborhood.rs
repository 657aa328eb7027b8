//! Neighbor generation.

use rand::Rng;

use crate::error::{Result, TabuError};

use super::config::NeighborPolicy;
use super::types::{Bounds, Candidate, Move, Objective};

impl NeighborPolicy {
    /// Generates the candidate moves around `current`.
    ///
    /// Deterministic moves come out ordered by coordinate, `-step` before
    /// `+step`, with out-of-bounds moves left out. Randomized moves are
    /// returned as sampled; clamping happens when they are applied.
    pub fn moves<R: Rng>(&self, current: &[f64], bounds: Option<Bounds>, rng: &mut R) -> Vec<Move> {
        match *self {
            NeighborPolicy::Deterministic { step } => {
                let mut moves = Vec::with_capacity(2 * current.len());
                for (index, &value) in current.iter().enumerate() {
                    for delta in [-step, step] {
                        let inside = bounds.is_none_or(|b| b.contains(value + delta));
                        if inside {
                            moves.push(Move::new(index, delta));
                        }
                    }
                }
                moves
            }
            NeighborPolicy::Randomized { count, magnitude } => (0..count)
                .map(|_| {
                    let index = rng.random_range(0..current.len());
                    let delta = rng.random_range(-magnitude..=magnitude);
                    Move::new(index, delta)
                })
                .collect(),
        }
    }
}

/// Builds and evaluates the neighborhood of `current`.
///
/// Every candidate is evaluated; the first objective failure aborts.
pub fn evaluate_neighbors<O, R>(
    objective: &O,
    current: &[f64],
    policy: &NeighborPolicy,
    bounds: Option<Bounds>,
    rng: &mut R,
) -> Result<Vec<Candidate>>
where
    O: Objective + ?Sized,
    R: Rng,
{
    policy
        .moves(current, bounds, rng)
        .into_iter()
        .map(|mv| {
            let solution = mv.apply(current, bounds);
            let value = objective.evaluate(&solution).map_err(TabuError::objective)?;
            Ok(Candidate { mv, solution, value })
        })
        .collect()
}
