//! Sequential benchmark runner.

use super::case::TestCase;
use super::error::{BenchError, BenchResult};
use super::result::BenchmarkResult;
use crate::counter::Counter;
use crate::observe::Observer;
use crate::source::SourceArray;
use crate::transform::Strategy;
use std::time::Duration;
use tracing::{debug, warn};

/// Runs tests one after another against a shared source and counter.
///
/// Each run resets the counter, builds the test through its factory, times a
/// single invocation, and checks the output length. A wrong length is
/// reported through the observer and recorded, never raised.
#[derive(Debug)]
pub struct BenchmarkRunner<O> {
    source: SourceArray,
    counter: Counter,
    observer: O,
    results: Vec<BenchmarkResult>,
}

impl<O: Observer> BenchmarkRunner<O> {
    /// Create a runner over `source` reporting to `observer`.
    pub fn new(source: SourceArray, observer: O) -> Self {
        Self {
            source,
            counter: Counter::new(),
            observer,
            results: Vec::new(),
        }
    }

    /// Run one test.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::EmptyTitle`] if `title` is empty. The factory is
    /// not called in that case.
    pub fn run<F, T>(&mut self, title: &str, factory: F) -> BenchResult<&BenchmarkResult>
    where
        F: FnOnce() -> T,
        T: FnOnce(&SourceArray, &mut Counter) -> Vec<f64>,
    {
        if title.is_empty() {
            return Err(BenchError::EmptyTitle);
        }

        self.counter.reset();
        let test_fn = factory();
        debug!(title, source_len = self.source.len(), "running benchmark");

        self.observer.time(title);
        let output = test_fn(&self.source, &mut self.counter);
        let elapsed = self.observer.time_end(title).unwrap_or(Duration::ZERO);

        let expected_len = self.source.expected_result_len();
        let passed = output.len() == expected_len;
        self.observer.assert(
            passed,
            &format!(
                "{} did not return the correct number of results (expected {}, got {})",
                title,
                expected_len,
                output.len()
            ),
        );
        if !passed {
            warn!(
                title,
                expected = expected_len,
                actual = output.len(),
                "result length mismatch"
            );
        }

        let index = self.results.len();
        self.results.push(BenchmarkResult {
            title: title.to_string(),
            elapsed,
            source_len: self.source.len(),
            expected_len,
            actual_len: output.len(),
            counter_after: self.counter.value(),
            passed,
        });
        Ok(&self.results[index])
    }

    /// Run a prepared test case.
    pub fn run_case(&mut self, case: &TestCase) -> BenchResult<&BenchmarkResult> {
        self.run(case.title(), || case.instantiate())
    }

    /// Run every case in order. Stops only on a malformed case.
    pub fn run_all<'a, I>(&mut self, cases: I) -> BenchResult<()>
    where
        I: IntoIterator<Item = &'a TestCase>,
    {
        for case in cases {
            self.run_case(case)?;
        }
        Ok(())
    }

    /// Run the given strategies in order.
    pub fn run_strategies(&mut self, strategies: &[Strategy]) {
        for &strategy in strategies {
            let case = TestCase::for_strategy(strategy);
            // strategy titles are never empty
            let _ = self.run_case(&case);
        }
    }

    /// All results so far, in run order.
    #[must_use]
    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    /// Results whose length check failed.
    pub fn failures(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Drain the collected results.
    pub fn take_results(&mut self) -> Vec<BenchmarkResult> {
        std::mem::take(&mut self.results)
    }

    /// The source every test scans.
    #[must_use]
    pub fn source(&self) -> &SourceArray {
        &self.source
    }

    /// Counter value left by the last run.
    #[must_use]
    pub fn counter_value(&self) -> u64 {
        self.counter.value()
    }

    /// Borrow the observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consume the runner, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::{ObservedEvent, RecordingObserver};
    use crate::transform;

    fn runner(len: usize) -> BenchmarkRunner<RecordingObserver> {
        BenchmarkRunner::new(SourceArray::new(len), RecordingObserver::new())
    }

    #[test]
    fn test_run_passes_for_correct_transform() {
        let mut runner = runner(100);
        let result = runner
            .run("Fast fix", || {
                |s: &SourceArray, c: &mut Counter| transform::apply(Strategy::Fold, s, c)
            })
            .unwrap();

        assert!(result.passed);
        assert_eq!(result.actual_len, 50);
        assert_eq!(result.counter_after, 100);
        assert_eq!(runner.observer().failures().count(), 0);
        assert_eq!(
            runner.observer().timed_labels().collect::<Vec<_>>(),
            vec!["Fast fix"]
        );
    }

    #[test]
    fn test_mismatch_is_not_fatal() {
        let mut runner = runner(10);
        let bad = runner
            .run("broken", || |_: &SourceArray, _: &mut Counter| vec![1.0])
            .unwrap();
        assert!(!bad.passed);

        let good = runner
            .run("Simple", || {
                |s: &SourceArray, c: &mut Counter| transform::apply(Strategy::Chained, s, c)
            })
            .unwrap();
        assert!(good.passed);

        assert_eq!(runner.results().len(), 2);
        assert_eq!(runner.failures().count(), 1);
        let failures: Vec<_> = runner.observer().failures().collect();
        assert_eq!(
            failures,
            vec!["broken did not return the correct number of results (expected 5, got 1)"]
        );
    }

    #[test]
    fn test_counter_reset_before_factory() {
        let mut runner = runner(6);
        runner.run_strategies(&[Strategy::Fused]);
        assert_eq!(runner.counter_value(), 6);

        // The factory sees a freshly reset counter on the next run.
        let result = runner
            .run("peek", || {
                |s: &SourceArray, c: &mut Counter| {
                    assert_eq!(c.value(), 0);
                    transform::apply(Strategy::Fused, s, c)
                }
            })
            .unwrap();
        assert!(result.passed);
    }

    #[test]
    fn test_empty_title_skips_factory() {
        let mut runner = runner(4);
        let mut called = false;
        let err = runner
            .run("", || {
                called = true;
                |_: &SourceArray, _: &mut Counter| Vec::<f64>::new()
            })
            .unwrap_err();
        assert_eq!(err, BenchError::EmptyTitle);
        assert!(!called);
        assert!(runner.results().is_empty());
        assert!(runner.observer().events().is_empty());
    }

    #[test]
    fn test_run_strategies_in_order() {
        let mut runner = runner(20);
        runner.run_strategies(&Strategy::ALL);

        let titles: Vec<_> = runner.results().iter().map(|r| r.title.as_str()).collect();
        let expected: Vec<_> = Strategy::ALL.iter().map(Strategy::title).collect();
        assert_eq!(titles, expected);
        assert!(runner.results().iter().all(|r| r.passed));
        assert!(runner
            .results()
            .iter()
            .all(BenchmarkResult::stepped_once_per_element));
    }

    #[test]
    fn test_take_results() {
        let mut runner = runner(2);
        runner.run_strategies(&[Strategy::Lazy, Strategy::Transducer]);
        assert_eq!(runner.take_results().len(), 2);
        assert!(runner.results().is_empty());
        assert!(matches!(
            runner.into_observer().events()[0],
            ObservedEvent::Timing { .. }
        ));
    }
}
