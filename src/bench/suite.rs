//! Ordered collections of test cases.

use super::case::TestCase;
use super::error::{BenchError, BenchResult};
use super::runner::BenchmarkRunner;
use crate::observe::Observer;
use crate::transform::Strategy;
use tracing::info;

/// Named group of test cases with unique titles.
#[derive(Debug)]
pub struct BenchmarkSuite {
    name: String,
    description: Option<String>,
    cases: Vec<TestCase>,
}

impl BenchmarkSuite {
    /// Create an empty suite.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            cases: Vec::new(),
        }
    }

    /// Suite running each strategy once, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::DuplicateTitle`] if a strategy is listed twice.
    pub fn from_strategies(name: impl Into<String>, strategies: &[Strategy]) -> BenchResult<Self> {
        let mut suite = Self::new(name);
        for &strategy in strategies {
            suite.add(TestCase::for_strategy(strategy))?;
        }
        Ok(suite)
    }

    /// Set description.
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Append a case.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::DuplicateTitle`] if the title is already taken.
    pub fn add(&mut self, case: TestCase) -> BenchResult<()> {
        if self.cases.iter().any(|c| c.title() == case.title()) {
            return Err(BenchError::DuplicateTitle(case.title().to_string()));
        }
        self.cases.push(case);
        Ok(())
    }

    /// Get suite name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Case titles in run order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(TestCase::title)
    }

    /// Number of cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the suite has no cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Run every case on `runner`, in order.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`BenchmarkRunner::run_all`].
    pub fn run<O: Observer>(&self, runner: &mut BenchmarkRunner<O>) -> BenchResult<()> {
        info!(
            suite = %self.name,
            cases = self.cases.len(),
            source_len = runner.source().len(),
            "running suite"
        );
        runner.run_all(&self.cases)
    }
}
