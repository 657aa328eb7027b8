//! Benchmark landscapes for exercising the search.
//!
//! [`BenchmarkFn`] covers the usual unimodal and multimodal test functions
//! and implements [`Objective`](crate::tabu::Objective). [`suite`] lists the
//! experiment parameters tuned for each of them.

mod functions;
mod suite;

pub use functions::{BenchmarkError, BenchmarkFn};
pub use suite::{suite, BenchmarkCase};
