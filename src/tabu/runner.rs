//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Evaluate the starting point
//! 2. At each iteration:
//!    a. Generate and evaluate the neighborhood
//!    b. Rank candidates by objective value
//!    c. Take the best non-tabu move (or a tabu move satisfying aspiration)
//!    d. Update global best if improved
//!    e. Decay the tabu memory, then forbid the inverse of the move taken
//! 3. Terminate after max iterations or when no move is admissible
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::error::{Result, TabuError};
use crate::stats::Summary;

use super::config::TabuConfig;
use super::memory::TabuMemory;
use super::neighborhood::evaluate_neighbors;
use super::types::{Candidate, Move, Objective, Solution};

/// Why a trajectory stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The iteration budget was used up.
    MaxIterations,
    /// Every candidate was tabu and none satisfied aspiration, or the
    /// neighborhood was empty.
    NoAdmissibleMove,
}

/// Result of a single Tabu Search trajectory.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Best solution observed during the trajectory.
    pub best_solution: Solution,
    /// Objective value of the best solution.
    pub best_value: f64,
    /// Statistics over every evaluated candidate (the start point excluded).
    /// `None` when no candidate was evaluated.
    pub evaluations: Option<Summary>,
    /// Iterations that committed a move.
    pub iterations: usize,
    /// Number of committed iterations when the best solution was reached
    /// (0 if it is the start).
    pub best_iteration: usize,
    /// Best value after each committed iteration.
    pub best_history: Vec<f64>,
    /// Move committed at each iteration.
    pub moves: Vec<Move>,
    pub termination: Termination,
}

impl RunResult {
    pub fn mean_value(&self) -> Option<f64> {
        self.evaluations.map(|s| s.mean)
    }

    pub fn median_value(&self) -> Option<f64> {
        self.evaluations.map(|s| s.median)
    }

    pub fn max_value(&self) -> Option<f64> {
        self.evaluations.map(|s| s.max)
    }

    pub fn std_value(&self) -> Option<f64> {
        self.evaluations.map(|s| s.std_dev)
    }
}

/// Incumbent, best-so-far and bookkeeping of one trajectory.
struct TrajectoryState {
    current: Solution,
    best: Solution,
    best_value: f64,
    best_iteration: usize,
    evaluated: Vec<f64>,
    best_history: Vec<f64>,
    moves: Vec<Move>,
}

impl TrajectoryState {
    fn new(start: Solution, start_value: f64) -> Self {
        Self {
            best: start.clone(),
            current: start,
            best_value: start_value,
            best_iteration: 0,
            evaluated: Vec::new(),
            best_history: Vec::new(),
            moves: Vec::new(),
        }
    }

    fn commit(&mut self, chosen: Candidate, iteration: usize) {
        if chosen.value < self.best_value {
            self.best = chosen.solution.clone();
            self.best_value = chosen.value;
            self.best_iteration = iteration + 1;
        }
        self.current = chosen.solution;
        self.moves.push(chosen.mv);
        self.best_history.push(self.best_value);
    }

    fn finish(self, termination: Termination) -> RunResult {
        RunResult {
            best_solution: self.best,
            best_value: self.best_value,
            evaluations: Summary::from_values(&self.evaluated),
            iterations: self.moves.len(),
            best_iteration: self.best_iteration,
            best_history: self.best_history,
            moves: self.moves,
            termination,
        }
    }
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Runs one trajectory from `start`, seeding the RNG from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tabu::tabu::{Bounds, NeighborPolicy, TabuConfig, TabuRunner};
    ///
    /// let config = TabuConfig::default()
    ///     .with_policy(NeighborPolicy::deterministic())
    ///     .with_bounds(Bounds::new(-10.0, 10.0).unwrap())
    ///     .with_tabu_tenure(2)
    ///     .with_max_iterations(50);
    /// let sphere = |x: &[f64]| x[0] * x[0];
    ///
    /// let result = TabuRunner::search(&sphere, &[5.0], &config).unwrap();
    /// assert_eq!(result.best_solution, vec![0.0]);
    /// ```
    pub fn search<O>(objective: &O, start: &[f64], config: &TabuConfig) -> Result<RunResult>
    where
        O: Objective + ?Sized,
    {
        let mut rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::search_with_rng(objective, start, config, &mut rng)
    }

    /// Runs one trajectory drawing randomness from `rng`.
    pub fn search_with_rng<O, R>(
        objective: &O,
        start: &[f64],
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<RunResult>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        config.validate()?;
        if start.is_empty() {
            return Err(TabuError::InvalidDimension);
        }
        if let Some(bounds) = &config.bounds {
            bounds.check_solution(start)?;
        }

        let start_value = objective.evaluate(start).map_err(TabuError::objective)?;
        debug!(
            dimensions = start.len(),
            start_value,
            max_iterations = config.max_iterations,
            tenure = config.tabu_tenure,
            "starting tabu search"
        );

        let mut state = TrajectoryState::new(start.to_vec(), start_value);
        let mut memory = TabuMemory::new();
        let mut termination = Termination::MaxIterations;

        for iteration in 0..config.max_iterations {
            let mut candidates =
                evaluate_neighbors(objective, &state.current, &config.policy, config.bounds, rng)?;
            state.evaluated.extend(candidates.iter().map(|c| c.value));

            // Stable sort: equal values keep generation order.
            candidates.sort_by(|a, b| a.value.total_cmp(&b.value));

            let best_value = state.best_value;
            let chosen = candidates.into_iter().find(|c| {
                !memory.is_tabu(&c.mv) || (config.aspiration && c.value < best_value)
            });

            let Some(chosen) = chosen else {
                debug!(iteration, "no admissible move, stopping early");
                termination = Termination::NoAdmissibleMove;
                break;
            };

            let mv = chosen.mv;
            trace!(iteration, index = mv.index, delta = mv.delta, value = chosen.value, "move");
            state.commit(chosen, iteration);

            memory.decay();
            memory.insert(mv.inverse(), config.tabu_tenure);
        }

        let result = state.finish(termination);
        debug!(
            best_value = result.best_value,
            iterations = result.iterations,
            ?termination,
            "tabu search finished"
        );
        Ok(result)
    }
}
