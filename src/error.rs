//! Error types.

use thiserror::Error;

/// Errors raised by the search engine and the experiment harness.
#[derive(Error, Debug)]
pub enum TabuError {
    #[error("starting solution must have at least one coordinate")]
    InvalidDimension,

    #[error("invalid bounds: low ({low}) must be less than high ({high})")]
    InvalidBounds { low: f64, high: f64 },

    #[error("tabu tenure must be positive")]
    InvalidTenure,

    #[error("invalid neighborhood: {0}")]
    InvalidNeighborhood(String),

    #[error("starting coordinate {index} ({value}) lies outside bounds [{low}, {high}]")]
    StartOutOfBounds {
        index: usize,
        value: f64,
        low: f64,
        high: f64,
    },

    #[error("invalid experiment configuration: {0}")]
    InvalidExperiment(String),

    /// The objective function failed. The original error is kept as the source.
    #[error("objective evaluation failed: {0}")]
    Objective(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl TabuError {
    /// Wraps an objective function error.
    pub fn objective<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        TabuError::Objective(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, TabuError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, Error)]
    #[error("domain violated")]
    struct DomainError;

    #[test]
    fn test_objective_error_keeps_source() {
        let err = TabuError::objective(DomainError);
        let source = err.source().expect("source should be present");
        assert!(source.downcast_ref::<DomainError>().is_some());
        assert_eq!(err.to_string(), "objective evaluation failed: domain violated");
    }

    #[test]
    fn test_bounds_message() {
        let err = TabuError::InvalidBounds { low: 2.0, high: 1.0 };
        assert_eq!(
            err.to_string(),
            "invalid bounds: low (2) must be less than high (1)"
        );
    }
}
