//! Tabu Search configuration.

use crate::error::{Result, TabuError};

use super::types::Bounds;

/// How candidate moves are generated at each iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborPolicy {
    /// `±step` along every coordinate (`2·D` candidates). Candidates leaving
    /// the bounds are skipped.
    Deterministic {
        /// Step length, positive.
        step: f64,
    },

    /// `count` samples, each perturbing a uniformly chosen coordinate by a
    /// uniform delta in `[-magnitude, magnitude]`. The perturbed coordinate
    /// is clamped into the bounds.
    ///
    /// Tabu status matches moves by their exact delta, and a sampled delta
    /// almost never equals the negation of an earlier one. Under this policy
    /// the tabu memory therefore rarely forbids anything, and the search
    /// behaves close to a steepest-neighbor random walk.
    Randomized {
        /// Candidates per iteration, positive.
        count: usize,
        /// Half-width of the perturbation window, positive.
        magnitude: f64,
    },
}

impl NeighborPolicy {
    /// Unit-step axis-aligned neighborhood.
    pub fn deterministic() -> Self {
        NeighborPolicy::Deterministic { step: 1.0 }
    }

    /// Randomized neighborhood with a `[-0.5, 0.5]` window.
    pub fn randomized(count: usize) -> Self {
        NeighborPolicy::Randomized {
            count,
            magnitude: 0.5,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            NeighborPolicy::Deterministic { step } => {
                if !(step.is_finite() && step > 0.0) {
                    return Err(TabuError::InvalidNeighborhood(format!(
                        "step must be positive and finite, got {step}"
                    )));
                }
            }
            NeighborPolicy::Randomized { count, magnitude } => {
                if count == 0 {
                    return Err(TabuError::InvalidNeighborhood(
                        "count must be positive".into(),
                    ));
                }
                // The sampling window spans 2 * magnitude.
                if !((2.0 * magnitude).is_finite() && magnitude > 0.0) {
                    return Err(TabuError::InvalidNeighborhood(format!(
                        "magnitude must be positive and finite, got {magnitude}"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for NeighborPolicy {
    fn default() -> Self {
        NeighborPolicy::randomized(10)
    }
}

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_tabu::tabu::{Bounds, NeighborPolicy, TabuConfig};
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_tenure(7)
///     .with_bounds(Bounds::new(-5.0, 5.0).unwrap())
///     .with_policy(NeighborPolicy::randomized(15))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.tabu_tenure, 7);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Maximum number of iterations. Zero evaluates the start point only.
    pub max_iterations: usize,
    /// How many iterations the inverse of a taken move stays tabu.
    pub tabu_tenure: usize,
    /// Interval applied to every coordinate (None for unbounded).
    pub bounds: Option<Bounds>,
    /// Neighbor generation policy.
    pub policy: NeighborPolicy,
    /// Whether a tabu move may be taken when it beats the best-known value.
    pub aspiration: bool,
    /// Random seed (None for random). Ignored by
    /// [`TabuRunner::search_with_rng`](super::TabuRunner::search_with_rng).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tabu_tenure: 5,
            bounds: None,
            policy: NeighborPolicy::default(),
            aspiration: true,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_policy(mut self, policy: NeighborPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enables or disables the aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.tabu_tenure == 0 {
            return Err(TabuError::InvalidTenure);
        }
        if let Some(bounds) = &self.bounds {
            bounds.validate()?;
        }
        self.policy.validate()
    }
}
