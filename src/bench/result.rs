//! Per-run outcome.

use serde::Serialize;
use std::time::Duration;

/// Outcome of a single timed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
    /// Test title.
    pub title: String,
    /// Wall-clock time of the single invocation.
    pub elapsed: Duration,
    /// Source length the test scanned.
    pub source_len: usize,
    /// `floor(source_len / 2)`.
    pub expected_len: usize,
    /// Length the test actually produced.
    pub actual_len: usize,
    /// Counter value after the run. Equals `source_len` for a correct test.
    pub counter_after: u64,
    /// Whether the length postcondition held.
    pub passed: bool,
}

impl BenchmarkResult {
    /// Nanoseconds spent per source element.
    #[must_use]
    pub fn ns_per_element(&self) -> f64 {
        if self.source_len == 0 {
            0.0
        } else {
            self.elapsed.as_nanos() as f64 / self.source_len as f64
        }
    }

    /// Whether the counter was stepped once per element.
    #[must_use]
    pub fn stepped_once_per_element(&self) -> bool {
        self.counter_after == self.source_len as u64
    }

    /// Format as a summary string.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: {:.3}ms, {}/{} results, {}",
            self.title,
            self.elapsed.as_secs_f64() * 1000.0,
            self.actual_len,
            self.expected_len,
            if self.passed { "ok" } else { "FAILED" }
        )
    }
}
