//! Experiment configuration.

use crate::error::{Result, TabuError};
use crate::tabu::{Bounds, TabuConfig};

/// Configuration of a multi-run experiment.
///
/// Run `i` draws its start point and its neighbor samples from an RNG seeded
/// with `base_seed.wrapping_add(i)`, where `base_seed` is [`seed`](Self::seed)
/// or a fresh random value.
///
/// # Examples
///
/// ```
/// use u_tabu::experiment::ExperimentConfig;
/// use u_tabu::tabu::{Bounds, TabuConfig};
///
/// let config = ExperimentConfig::new(5, Bounds::new(-5.0, 5.0).unwrap())
///     .with_num_runs(20)
///     .with_search(TabuConfig::default().with_tabu_tenure(7))
///     .with_seed(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Number of independent trajectories.
    pub num_runs: usize,
    /// Dimensionality of every start point.
    pub dimensions: usize,
    /// Sampling interval for start points; also bounds every trajectory.
    pub bounds: Bounds,
    /// Per-trajectory search parameters. Its `bounds` and `seed` are
    /// overridden per run.
    pub search: TabuConfig,
    /// Base seed (None for random).
    pub seed: Option<u64>,
    /// Whether to run trajectories in parallel using rayon.
    pub parallel: bool,
}

impl ExperimentConfig {
    pub fn new(dimensions: usize, bounds: Bounds) -> Self {
        Self {
            num_runs: 25,
            dimensions,
            bounds,
            search: TabuConfig::default(),
            seed: None,
            parallel: false,
        }
    }

    pub fn with_num_runs(mut self, n: usize) -> Self {
        self.num_runs = n;
        self
    }

    pub fn with_search(mut self, search: TabuConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The search configuration each trajectory actually runs with.
    pub fn run_search_config(&self) -> TabuConfig {
        let mut search = self.search.clone().with_bounds(self.bounds);
        search.seed = None;
        search
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_runs == 0 {
            return Err(TabuError::InvalidExperiment(
                "num_runs must be positive".into(),
            ));
        }
        if self.dimensions == 0 {
            return Err(TabuError::InvalidExperiment(
                "dimensions must be positive".into(),
            ));
        }
        self.bounds.validate()?;
        self.run_search_config().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(-5.0, 5.0).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = ExperimentConfig::new(3, bounds());
        assert_eq!(config.num_runs, 25);
        assert_eq!(config.dimensions, 3);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
    }

    #[test]
    fn test_run_search_config_overrides_bounds_and_seed() {
        let search = TabuConfig::default()
            .with_bounds(Bounds { low: -1.0, high: 1.0 })
            .with_seed(3);
        let config = ExperimentConfig::new(2, bounds()).with_search(search);

        let run = config.run_search_config();
        assert_eq!(run.bounds, Some(bounds()));
        assert!(run.seed.is_none());
    }

    #[test]
    fn test_validate_rejects_empty_experiment() {
        assert!(matches!(
            ExperimentConfig::new(2, bounds()).with_num_runs(0).validate(),
            Err(TabuError::InvalidExperiment(_))
        ));
        assert!(matches!(
            ExperimentConfig::new(0, bounds()).validate(),
            Err(TabuError::InvalidExperiment(_))
        ));
    }

    #[test]
    fn test_validate_checks_search() {
        let config = ExperimentConfig::new(2, bounds())
            .with_search(TabuConfig::default().with_tabu_tenure(0));
        assert!(matches!(config.validate(), Err(TabuError::InvalidTenure)));

        let config = ExperimentConfig::new(2, Bounds { low: 1.0, high: 0.0 });
        assert!(matches!(
            config.validate(),
            Err(TabuError::InvalidBounds { .. })
        ));
    }
}
