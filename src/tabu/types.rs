//! Core types for continuous Tabu Search.

use crate::error::{Result, TabuError};

/// A decision vector.
pub type Solution = Vec<f64>;

/// A closed interval `[low, high]` applied to every coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub low: f64,
    pub high: f64,
}

impl Bounds {
    /// Creates bounds, rejecting `low >= high` (and NaN limits).
    pub fn new(low: f64, high: f64) -> Result<Self> {
        let bounds = Self { low, high };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Rejects non-finite limits, `low >= high`, and intervals too wide for
    /// their width to be represented.
    pub fn validate(&self) -> Result<()> {
        let finite = self.low.is_finite() && self.high.is_finite() && self.width().is_finite();
        if !finite || self.low >= self.high {
            return Err(TabuError::InvalidBounds {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.low, self.high)
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Fails with [`TabuError::StartOutOfBounds`] on the first coordinate
    /// outside the interval.
    pub fn check_solution(&self, solution: &[f64]) -> Result<()> {
        match solution.iter().position(|&v| !self.contains(v)) {
            Some(index) => Err(TabuError::StartOutOfBounds {
                index,
                value: solution[index],
                low: self.low,
                high: self.high,
            }),
            None => Ok(()),
        }
    }
}

/// A single-coordinate perturbation: `solution[index] += delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub index: usize,
    pub delta: f64,
}

impl Move {
    pub fn new(index: usize, delta: f64) -> Self {
        Self { index, delta }
    }

    /// The move that undoes this one: same coordinate, negated delta.
    pub fn inverse(&self) -> Self {
        Self {
            index: self.index,
            delta: -self.delta,
        }
    }

    /// Hashable identity of the move, used by the tabu memory.
    pub fn key(&self) -> MoveKey {
        MoveKey::from(*self)
    }

    /// Returns a copy of `solution` with this move applied. With bounds, the
    /// perturbed coordinate is clamped into the interval.
    pub fn apply(&self, solution: &[f64], bounds: Option<Bounds>) -> Solution {
        let mut next = solution.to_vec();
        let value = next[self.index] + self.delta;
        next[self.index] = match bounds {
            Some(b) => b.clamp(value),
            None => value,
        };
        next
    }
}

/// Exact identity of a [`Move`]: coordinate index plus the bit pattern of the
/// delta. `-0.0` and `0.0` map to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveKey {
    index: usize,
    delta_bits: u64,
}

impl From<Move> for MoveKey {
    fn from(mv: Move) -> Self {
        let delta = if mv.delta == 0.0 { 0.0 } else { mv.delta };
        Self {
            index: mv.index,
            delta_bits: delta.to_bits(),
        }
    }
}

/// An evaluated neighbor: the move, the resulting solution, and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub mv: Move,
    pub solution: Solution,
    pub value: f64,
}

/// A function to minimize over real-valued vectors.
///
/// Implemented for every `Fn(&[f64]) -> f64`. Wrap a fallible closure in
/// [`Fallible`] to have its errors propagated out of the search.
///
/// # Examples
///
/// ```
/// use u_tabu::tabu::Objective;
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]).unwrap(), 5.0);
/// ```
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`. Lower is better.
    fn evaluate(&self, x: &[f64]) -> std::result::Result<f64, Self::Error>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    type Error = std::convert::Infallible;

    fn evaluate(&self, x: &[f64]) -> std::result::Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Adapter for objectives that can fail.
///
/// ```
/// use u_tabu::tabu::{Fallible, Objective};
///
/// let log = Fallible(|x: &[f64]| {
///     if x[0] > 0.0 { Ok(x[0].ln()) } else { Err(std::fmt::Error) }
/// });
/// assert!(log.evaluate(&[-1.0]).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Objective for Fallible<F>
where
    F: Fn(&[f64]) -> std::result::Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, x: &[f64]) -> std::result::Result<f64, E> {
        (self.0)(x)
    }
}
