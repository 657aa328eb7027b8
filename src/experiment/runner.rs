//! Multi-run experiment execution.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{Result, TabuError};
use crate::stats::Summary;
use crate::tabu::{Objective, RunResult, Solution, TabuConfig, TabuRunner};

use super::config::ExperimentConfig;

/// Aggregate result of an experiment.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentResult {
    /// Best solution across all runs.
    pub best_solution: Solution,
    /// Lowest best value across all runs.
    pub best_value: f64,
    /// Index of the run that produced the best solution (first on ties).
    pub best_run: usize,
    /// Statistics over the per-run best values.
    pub summary: Summary,
    /// Every run, in run-index order.
    pub runs: Vec<RunResult>,
    /// Seed that run 0 used; run `i` used `base_seed.wrapping_add(i)`.
    pub base_seed: u64,
}

/// Runs independent Tabu Search trajectories and aggregates them.
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Runs the experiment.
    ///
    /// Results do not depend on `config.parallel`: each run owns its RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tabu::experiment::{ExperimentConfig, ExperimentRunner};
    /// use u_tabu::tabu::{Bounds, TabuConfig};
    ///
    /// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
    /// let config = ExperimentConfig::new(3, Bounds::new(-5.0, 5.0).unwrap())
    ///     .with_num_runs(4)
    ///     .with_search(TabuConfig::default().with_max_iterations(200))
    ///     .with_seed(7);
    ///
    /// let result = ExperimentRunner::run(&sphere, &config).unwrap();
    /// assert_eq!(result.runs.len(), 4);
    /// assert!(result.best_value <= result.summary.median);
    /// ```
    pub fn run<O>(objective: &O, config: &ExperimentConfig) -> Result<ExperimentResult>
    where
        O: Objective + Sync + ?Sized,
    {
        config.validate()?;

        let base_seed = config.seed.unwrap_or_else(rand::random);
        let search = config.run_search_config();
        info!(
            runs = config.num_runs,
            dimensions = config.dimensions,
            base_seed,
            parallel = config.parallel,
            "starting experiment"
        );

        let runs: Vec<RunResult> = if config.parallel {
            (0..config.num_runs)
                .into_par_iter()
                .map(|i| run_once(objective, config, &search, base_seed, i))
                .collect::<Result<_>>()?
        } else {
            (0..config.num_runs)
                .map(|i| run_once(objective, config, &search, base_seed, i))
                .collect::<Result<_>>()?
        };

        let (best_run, best) = runs
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.best_value.total_cmp(&b.1.best_value))
            .ok_or_else(|| TabuError::InvalidExperiment("no runs executed".into()))?;
        let best_values: Vec<f64> = runs.iter().map(|r| r.best_value).collect();
        let summary = Summary::from_values(&best_values)
            .ok_or_else(|| TabuError::InvalidExperiment("no runs executed".into()))?;

        info!(
            best_value = best.best_value,
            best_run,
            mean = summary.mean,
            median = summary.median,
            max = summary.max,
            "experiment finished"
        );

        Ok(ExperimentResult {
            best_solution: best.best_solution.clone(),
            best_value: best.best_value,
            best_run,
            summary,
            runs,
            base_seed,
        })
    }
}

/// Draws the start point of run `index` and runs its trajectory.
fn run_once<O>(
    objective: &O,
    config: &ExperimentConfig,
    search: &TabuConfig,
    base_seed: u64,
    index: usize,
) -> Result<RunResult>
where
    O: Objective + ?Sized,
{
    let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(index as u64));
    let start: Solution = (0..config.dimensions)
        .map(|_| rng.random_range(config.bounds.low..=config.bounds.high))
        .collect();

    let result = TabuRunner::search_with_rng(objective, &start, search, &mut rng)?;
    debug!(run = index, best_value = result.best_value, "run finished");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabu::{Bounds, Fallible, NeighborPolicy};

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    fn config() -> ExperimentConfig {
        ExperimentConfig::new(3, Bounds::new(-5.0, 5.0).unwrap())
            .with_num_runs(6)
            .with_search(
                TabuConfig::default()
                    .with_max_iterations(300)
                    .with_tabu_tenure(5),
            )
            .with_seed(11)
    }

    #[test]
    fn test_tracks_best_run() {
        let result = ExperimentRunner::run(&sphere, &config()).unwrap();

        assert_eq!(result.runs.len(), 6);
        assert_eq!(result.base_seed, 11);
        let min = result
            .runs
            .iter()
            .map(|r| r.best_value)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_value, min);
        assert_eq!(result.runs[result.best_run].best_value, min);
        assert_eq!(result.best_solution, result.runs[result.best_run].best_solution);
        assert_eq!(result.summary.count, 6);
        assert_eq!(result.summary.min, min);
        assert!(result.summary.max >= result.summary.median);
    }

    #[test]
    fn test_seeded_experiment_is_reproducible() {
        let a = ExperimentRunner::run(&sphere, &config()).unwrap();
        let b = ExperimentRunner::run(&sphere, &config()).unwrap();
        for (ra, rb) in a.runs.iter().zip(&b.runs) {
            assert_eq!(ra.best_solution, rb.best_solution);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = ExperimentRunner::run(&sphere, &config()).unwrap();
        let parallel = ExperimentRunner::run(&sphere, &config().with_parallel(true)).unwrap();

        assert_eq!(sequential.best_run, parallel.best_run);
        for (s, p) in sequential.runs.iter().zip(&parallel.runs) {
            assert_eq!(s.best_value.to_bits(), p.best_value.to_bits());
            assert_eq!(s.best_solution, p.best_solution);
        }
    }

    #[test]
    fn test_runs_use_distinct_starts() {
        let config = config().with_search(TabuConfig::default().with_max_iterations(0));
        let result = ExperimentRunner::run(&sphere, &config).unwrap();

        // Zero iterations: every best solution is the sampled start point.
        for (i, a) in result.runs.iter().enumerate() {
            assert!(a.best_solution.iter().all(|v| (-5.0..=5.0).contains(v)));
            for b in &result.runs[i + 1..] {
                assert_ne!(a.best_solution, b.best_solution);
            }
        }
    }

    #[test]
    fn test_deterministic_policy_reaches_integer_optimum() {
        let config = ExperimentConfig::new(2, Bounds::new(-5.0, 5.0).unwrap())
            .with_num_runs(4)
            .with_search(
                TabuConfig::default()
                    .with_policy(NeighborPolicy::Deterministic { step: 0.25 })
                    .with_max_iterations(200),
            )
            .with_seed(3);
        let result = ExperimentRunner::run(&sphere, &config).unwrap();
        for run in &result.runs {
            assert!(run.best_value <= 2.0 * 0.125 * 0.125 + 1e-12, "{}", run.best_value);
        }
    }

    #[test]
    fn test_objective_error_aborts_experiment() {
        #[derive(Debug, thiserror::Error)]
        #[error("unavailable")]
        struct Unavailable;

        let failing = Fallible(|_: &[f64]| Err::<f64, _>(Unavailable));
        assert!(matches!(
            ExperimentRunner::run(&failing, &config().with_parallel(true)),
            Err(TabuError::Objective(_))
        ));
    }

    #[test]
    fn test_unrepresentable_bounds_are_rejected() {
        let config = ExperimentConfig::new(2, Bounds { low: -1e308, high: 1e308 }).with_seed(1);
        assert!(matches!(
            ExperimentRunner::run(&sphere, &config),
            Err(TabuError::InvalidBounds { .. })
        ));

        let config = ExperimentConfig::new(2, Bounds { low: f64::NEG_INFINITY, high: 0.0 });
        assert!(matches!(
            ExperimentRunner::run(&sphere, &config),
            Err(TabuError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(
            ExperimentRunner::run(&sphere, &config().with_num_runs(0)),
            Err(TabuError::InvalidExperiment(_))
        ));
    }
}
