//! Named test cases.

use super::error::{BenchError, BenchResult};
use crate::counter::Counter;
use crate::source::SourceArray;
use crate::transform::{self, Strategy};
use std::fmt;

/// The runnable a factory hands back. Called exactly once per run.
pub type TestFn = Box<dyn FnMut(&SourceArray, &mut Counter) -> Vec<f64>>;

/// Builds a fresh [`TestFn`], doing any one-time setup first.
pub type Factory = Box<dyn Fn() -> TestFn>;

/// A titled test factory.
pub struct TestCase {
    title: String,
    factory: Factory,
}

impl TestCase {
    /// Create a test case.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::EmptyTitle`] if `title` is empty.
    pub fn new<F, T>(title: impl Into<String>, factory: F) -> BenchResult<Self>
    where
        F: Fn() -> T + 'static,
        T: FnMut(&SourceArray, &mut Counter) -> Vec<f64> + 'static,
    {
        let title = title.into();
        if title.is_empty() {
            return Err(BenchError::EmptyTitle);
        }
        Ok(Self {
            title,
            factory: Box::new(move || Box::new(factory()) as TestFn),
        })
    }

    /// Test case running one transform strategy, titled after it.
    #[must_use]
    pub fn for_strategy(strategy: Strategy) -> Self {
        Self {
            title: strategy.title().to_string(),
            factory: Box::new(move || {
                Box::new(move |source: &SourceArray, counter: &mut Counter| {
                    transform::apply(strategy, source, counter)
                }) as TestFn
            }),
        }
    }

    /// The test title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Run the factory.
    #[must_use]
    pub fn instantiate(&self) -> TestFn {
        (self.factory)()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_rejected() {
        let err = TestCase::new("", || {
            |_: &SourceArray, _: &mut Counter| Vec::<f64>::new()
        })
        .unwrap_err();
        assert_eq!(err, BenchError::EmptyTitle);
    }

    #[test]
    fn test_for_strategy_uses_title() {
        let case = TestCase::for_strategy(Strategy::Lazy);
        assert_eq!(case.title(), "Generators");

        let mut run = case.instantiate();
        let mut counter = Counter::new();
        assert_eq!(run(&SourceArray::new(4), &mut counter), vec![1.0, 2.0]);
    }

    #[test]
    fn test_factory_runs_per_instantiate() {
        use std::cell::Cell;
        use std::rc::Rc;

        let built = Rc::new(Cell::new(0));
        let seen = Rc::clone(&built);
        let case = TestCase::new("counting", move || {
            seen.set(seen.get() + 1);
            |_: &SourceArray, _: &mut Counter| Vec::<f64>::new()
        })
        .unwrap();

        let _ = case.instantiate();
        let _ = case.instantiate();
        assert_eq!(built.get(), 2);
    }
}
