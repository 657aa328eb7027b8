//! Per-function experiment parameters.

use crate::experiment::ExperimentConfig;
use crate::tabu::{Bounds, NeighborPolicy, TabuConfig};

use super::functions::BenchmarkFn;

/// One row of the benchmark table: a function and the experiment tuned for it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkCase {
    pub function: BenchmarkFn,
    pub num_runs: usize,
    /// Randomized candidates per iteration.
    pub neighbors: usize,
    pub tenure: usize,
    pub max_iterations: usize,
    pub bounds: Bounds,
    pub dimensions: usize,
}

impl BenchmarkCase {
    /// Builds the experiment for this case with a randomized neighborhood.
    pub fn to_experiment(&self) -> ExperimentConfig {
        let search = TabuConfig::default()
            .with_policy(NeighborPolicy::randomized(self.neighbors))
            .with_tabu_tenure(self.tenure)
            .with_max_iterations(self.max_iterations);
        ExperimentConfig::new(self.dimensions, self.bounds)
            .with_num_runs(self.num_runs)
            .with_search(search)
    }
}

/// The standard benchmark table, five dimensions per function.
pub fn suite() -> Vec<BenchmarkCase> {
    use BenchmarkFn::*;

    let row = |function: BenchmarkFn,
               num_runs: usize,
               neighbors: usize,
               tenure: usize,
               max_iterations: usize,
               (low, high): (f64, f64)| BenchmarkCase {
        function,
        num_runs,
        neighbors,
        tenure,
        max_iterations,
        bounds: Bounds { low, high },
        dimensions: 5,
    };

    vec![
        row(Sphere, 20, 10, 5, 1000, (-5.0, 5.0)),
        row(Rastrigin, 25, 15, 7, 1500, (-5.0, 5.0)),
        row(Ackley, 22, 20, 5, 1000, (-5.0, 5.0)),
        row(Rosenbrock, 24, 15, 10, 2000, (-5.0, 5.0)),
        row(Step, 20, 10, 3, 500, (-5.0, 5.0)),
        row(Schwefel, 25, 20, 8, 1500, (-500.0, 500.0)),
        row(Griewank, 23, 15, 5, 1000, (-600.0, 600.0)),
        row(Levy, 21, 12, 6, 1000, (-10.0, 10.0)),
        row(Zakharov, 22, 10, 5, 800, (-5.0, 10.0)),
        row(Bohachevsky, 24, 15, 5, 1000, (-100.0, 100.0)),
        row(SchafferN2, 25, 20, 7, 1200, (-100.0, 100.0)),
        row(Matyas, 20, 10, 4, 500, (-10.0, 10.0)),
        row(SumOfSquares, 21, 10, 5, 600, (-10.0, 10.0)),
        row(Trid, 23, 15, 6, 1000, (-25.0, 25.0)),
        row(Booth, 20, 10, 4, 500, (-10.0, 10.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::ExperimentRunner;

    #[test]
    fn test_suite_configs_are_valid() {
        let cases = suite();
        assert_eq!(cases.len(), 15);
        for case in &cases {
            let config = case.to_experiment();
            assert!(config.validate().is_ok(), "{} invalid", case.function);
            assert!(case.dimensions >= case.function.min_dimensions());
        }
    }

    #[test]
    fn test_case_to_experiment() {
        let case = suite()
            .into_iter()
            .find(|c| c.function == BenchmarkFn::Rastrigin)
            .unwrap();
        let config = case.to_experiment();

        assert_eq!(config.num_runs, 25);
        assert_eq!(config.dimensions, 5);
        assert_eq!(config.search.tabu_tenure, 7);
        assert_eq!(config.search.max_iterations, 1500);
        assert_eq!(
            config.search.policy,
            NeighborPolicy::Randomized {
                count: 15,
                magnitude: 0.5
            }
        );
    }

    #[test]
    fn test_sphere_case_gets_close_to_optimum() {
        let case = suite()
            .into_iter()
            .find(|c| c.function == BenchmarkFn::Sphere)
            .unwrap();
        let config = case.to_experiment().with_num_runs(3).with_seed(5);
        let result = ExperimentRunner::run(&case.function, &config).unwrap();
        assert!(result.best_value < 0.5, "got {}", result.best_value);
    }
}
