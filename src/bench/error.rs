//! Benchmark error types.

use thiserror::Error;

/// Errors raised while assembling or running benchmarks.
///
/// A result of the wrong length is not an error; it is reported through the
/// observer and recorded on the [`BenchmarkResult`](super::BenchmarkResult).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenchError {
    /// Test titles label timers and must not be empty.
    #[error("benchmark title must not be empty")]
    EmptyTitle,

    /// Two tests in one suite share a title.
    #[error("duplicate benchmark title: {0}")]
    DuplicateTitle(String),
}

/// Result type for benchmark operations.
pub type BenchResult<T> = Result<T, BenchError>;
