//! Standard continuous benchmark landscapes.

use std::f64::consts::{E, PI};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::tabu::{Bounds, Objective};

/// Errors raised by benchmark functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchmarkError {
    #[error("{name} needs at least {required} dimensions, got {got}")]
    TooFewDimensions {
        name: &'static str,
        required: usize,
        got: usize,
    },

    #[error("unknown benchmark function: {0}")]
    UnknownFunction(String),
}

/// A benchmark objective with a known global minimum.
///
/// # Examples
///
/// ```
/// use u_tabu::benchmarks::BenchmarkFn;
/// use u_tabu::tabu::Objective;
///
/// let f: BenchmarkFn = "rastrigin".parse().unwrap();
/// assert_eq!(f.evaluate(&[0.0, 0.0]).unwrap(), 0.0);
/// assert!(BenchmarkFn::Booth.evaluate(&[1.0]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BenchmarkFn {
    Sphere,
    SumOfSquares,
    Schwefel222,
    Step,
    Rosenbrock,
    Rastrigin,
    Ackley,
    Griewank,
    Levy,
    Zakharov,
    DixonPrice,
    BentCigar,
    HighConditionedElliptic,
    Alpine,
    Salomon,
    Schwefel,
    Bohachevsky,
    SchafferN2,
    Matyas,
    Trid,
    Booth,
}

impl BenchmarkFn {
    pub const ALL: [BenchmarkFn; 21] = [
        BenchmarkFn::Sphere,
        BenchmarkFn::SumOfSquares,
        BenchmarkFn::Schwefel222,
        BenchmarkFn::Step,
        BenchmarkFn::Rosenbrock,
        BenchmarkFn::Rastrigin,
        BenchmarkFn::Ackley,
        BenchmarkFn::Griewank,
        BenchmarkFn::Levy,
        BenchmarkFn::Zakharov,
        BenchmarkFn::DixonPrice,
        BenchmarkFn::BentCigar,
        BenchmarkFn::HighConditionedElliptic,
        BenchmarkFn::Alpine,
        BenchmarkFn::Salomon,
        BenchmarkFn::Schwefel,
        BenchmarkFn::Bohachevsky,
        BenchmarkFn::SchafferN2,
        BenchmarkFn::Matyas,
        BenchmarkFn::Trid,
        BenchmarkFn::Booth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BenchmarkFn::Sphere => "Sphere",
            BenchmarkFn::SumOfSquares => "Sum_of_Squares",
            BenchmarkFn::Schwefel222 => "Schwefel_2.22",
            BenchmarkFn::Step => "Step",
            BenchmarkFn::Rosenbrock => "Rosenbrock",
            BenchmarkFn::Rastrigin => "Rastrigin",
            BenchmarkFn::Ackley => "Ackley",
            BenchmarkFn::Griewank => "Griewank",
            BenchmarkFn::Levy => "Levy",
            BenchmarkFn::Zakharov => "Zakharov",
            BenchmarkFn::DixonPrice => "Dixon_Price",
            BenchmarkFn::BentCigar => "Bent_Cigar",
            BenchmarkFn::HighConditionedElliptic => "High_Conditioned_Elliptic",
            BenchmarkFn::Alpine => "Alpine",
            BenchmarkFn::Salomon => "Salomon",
            BenchmarkFn::Schwefel => "Schwefel",
            BenchmarkFn::Bohachevsky => "Bohachevsky",
            BenchmarkFn::SchafferN2 => "Schaffer_N2",
            BenchmarkFn::Matyas => "Matyas",
            BenchmarkFn::Trid => "Trid",
            BenchmarkFn::Booth => "Booth",
        }
    }

    /// Smallest dimensionality the function is defined for.
    pub fn min_dimensions(&self) -> usize {
        match self {
            BenchmarkFn::Rosenbrock
            | BenchmarkFn::Bohachevsky
            | BenchmarkFn::SchafferN2
            | BenchmarkFn::Matyas
            | BenchmarkFn::Booth => 2,
            _ => 1,
        }
    }

    /// Customary search domain for `dims` dimensions.
    pub fn domain(&self, dims: usize) -> Bounds {
        let (low, high) = match self {
            BenchmarkFn::Sphere | BenchmarkFn::Rastrigin => (-5.12, 5.12),
            BenchmarkFn::SumOfSquares
            | BenchmarkFn::Schwefel222
            | BenchmarkFn::Levy
            | BenchmarkFn::DixonPrice
            | BenchmarkFn::Alpine
            | BenchmarkFn::Matyas
            | BenchmarkFn::Booth => (-10.0, 10.0),
            BenchmarkFn::Step
            | BenchmarkFn::BentCigar
            | BenchmarkFn::HighConditionedElliptic
            | BenchmarkFn::Salomon
            | BenchmarkFn::Bohachevsky
            | BenchmarkFn::SchafferN2 => (-100.0, 100.0),
            BenchmarkFn::Rosenbrock | BenchmarkFn::Zakharov => (-5.0, 10.0),
            BenchmarkFn::Ackley => (-32.0, 32.0),
            BenchmarkFn::Griewank => (-600.0, 600.0),
            BenchmarkFn::Schwefel => (-500.0, 500.0),
            BenchmarkFn::Trid => {
                let d = dims.max(1) as f64;
                (-d * d, d * d)
            }
        };
        Bounds { low, high }
    }

    /// Known global minimum value in `dims` dimensions.
    pub fn global_minimum(&self, dims: usize) -> f64 {
        match self {
            BenchmarkFn::Trid => {
                let d = dims as f64;
                -d * (d + 4.0) * (d - 1.0) / 6.0
            }
            _ => 0.0,
        }
    }

    /// Evaluates the function. `x` must have at least
    /// [`min_dimensions`](Self::min_dimensions) coordinates.
    pub fn eval(&self, x: &[f64]) -> f64 {
        match self {
            BenchmarkFn::Sphere => x.iter().map(|v| v * v).sum(),
            BenchmarkFn::SumOfSquares => x
                .iter()
                .enumerate()
                .map(|(i, v)| (i + 1) as f64 * v * v)
                .sum(),
            BenchmarkFn::Schwefel222 => {
                x.iter().map(|v| v.abs()).sum::<f64>() + x.iter().map(|v| v.abs()).product::<f64>()
            }
            BenchmarkFn::Step => x.iter().map(|v| v.trunc().powi(2)).sum(),
            BenchmarkFn::Rosenbrock => x
                .windows(2)
                .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
                .sum(),
            BenchmarkFn::Rastrigin => {
                10.0 * x.len() as f64
                    + x.iter()
                        .map(|v| v * v - 10.0 * (2.0 * PI * v).cos())
                        .sum::<f64>()
            }
            BenchmarkFn::Ackley => ackley(x),
            BenchmarkFn::Griewank => {
                let sum_sq: f64 = x.iter().map(|v| v * v).sum();
                let prod_cos: f64 = x
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (v / ((i + 1) as f64).sqrt()).cos())
                    .product();
                1.0 + sum_sq / 4000.0 - prod_cos
            }
            BenchmarkFn::Levy => levy(x),
            BenchmarkFn::Zakharov => {
                let sum_sq: f64 = x.iter().map(|v| v * v).sum();
                let weighted: f64 = x
                    .iter()
                    .enumerate()
                    .map(|(i, v)| 0.5 * (i + 1) as f64 * v)
                    .sum();
                sum_sq + weighted.powi(2) + weighted.powi(4)
            }
            BenchmarkFn::DixonPrice => {
                (x[0] - 1.0).powi(2)
                    + (1..x.len())
                        .map(|i| (i + 1) as f64 * (2.0 * x[i] * x[i] - x[i - 1]).powi(2))
                        .sum::<f64>()
            }
            BenchmarkFn::BentCigar => {
                x[0] * x[0] + 1e6 * x[1..].iter().map(|v| v * v).sum::<f64>()
            }
            BenchmarkFn::HighConditionedElliptic => {
                let n = x.len();
                x.iter()
                    .enumerate()
                    .map(|(i, v)| {
                        let exponent = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
                        1e6f64.powf(exponent) * v * v
                    })
                    .sum()
            }
            BenchmarkFn::Alpine => x.iter().map(|v| (v * v.sin() + 0.1 * v).abs()).sum(),
            BenchmarkFn::Salomon => {
                let norm = x.iter().map(|v| v * v).sum::<f64>().sqrt();
                1.0 - (2.0 * PI * norm).cos() + 0.1 * norm
            }
            BenchmarkFn::Schwefel => {
                418.9829 * x.len() as f64
                    - x.iter().map(|v| v * v.abs().sqrt().sin()).sum::<f64>()
            }
            BenchmarkFn::Bohachevsky => x
                .windows(2)
                .map(|w| {
                    w[0] * w[0] + 2.0 * w[1] * w[1]
                        - 0.3 * (3.0 * PI * w[0]).cos()
                        - 0.4 * (4.0 * PI * w[1]).cos()
                        + 0.7
                })
                .sum(),
            BenchmarkFn::SchafferN2 => x
                .windows(2)
                .map(|w| {
                    let (a, b) = (w[0] * w[0], w[1] * w[1]);
                    0.5 + ((a - b).sin().powi(2) - 0.5) / (1.0 + 0.001 * (a + b)).powi(2)
                })
                .sum(),
            BenchmarkFn::Matyas => 0.26 * (x[0] * x[0] + x[1] * x[1]) - 0.48 * x[0] * x[1],
            BenchmarkFn::Trid => {
                x.iter().map(|v| (v - 1.0).powi(2)).sum::<f64>()
                    - x.windows(2).map(|w| w[0] * w[1]).sum::<f64>()
            }
            BenchmarkFn::Booth => {
                (x[0] + 2.0 * x[1] - 7.0).powi(2) + (2.0 * x[0] + x[1] - 5.0).powi(2)
            }
        }
    }
}

fn ackley(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    let s1: f64 = x.iter().map(|v| v * v).sum();
    let s2: f64 = x.iter().map(|v| (2.0 * PI * v).cos()).sum();
    -20.0 * (-0.2 * (s1 / n).sqrt()).exp() - (s2 / n).exp() + 20.0 + E
}

fn levy(x: &[f64]) -> f64 {
    let w: Vec<f64> = x.iter().map(|v| (v - 1.0) / 4.0 + 1.0).collect();
    let last = w[w.len() - 1];

    let head = (PI * w[0]).sin().powi(2);
    let body: f64 = w[..w.len() - 1]
        .iter()
        .map(|wi| (wi - 1.0).powi(2) * (1.0 + 10.0 * (PI * wi + 1.0).sin().powi(2)))
        .sum();
    let tail = (last - 1.0).powi(2) * (1.0 + (2.0 * PI * last).sin().powi(2));

    head + body + tail
}

impl Objective for BenchmarkFn {
    type Error = BenchmarkError;

    fn evaluate(&self, x: &[f64]) -> Result<f64, BenchmarkError> {
        let required = self.min_dimensions();
        if x.len() < required {
            return Err(BenchmarkError::TooFewDimensions {
                name: self.name(),
                required,
                got: x.len(),
            });
        }
        Ok(self.eval(x))
    }
}

impl fmt::Display for BenchmarkFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BenchmarkFn {
    type Err = BenchmarkError;

    /// Parses a function name, ignoring case, `_`, `-`, `.` and spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalize = |name: &str| -> String {
            name.chars()
                .filter(|c| !matches!(c, '_' | '-' | '.' | ' '))
                .flat_map(char::to_lowercase)
                .collect()
        };
        let wanted = normalize(s);
        BenchmarkFn::ALL
            .into_iter()
            .find(|f| normalize(f.name()) == wanted)
            .ok_or_else(|| BenchmarkError::UnknownFunction(s.to_string()))
    }
}
