//! # Benchmark Harness
//!
//! Runs titled tests one at a time against a shared [`SourceArray`] and
//! [`Counter`], timing each single invocation and checking that it produced
//! `floor(N / 2)` results.
//!
//! ## Example
//!
//! ```rust
//! use idiom_bench::bench::BenchmarkRunner;
//! use idiom_bench::counter::Counter;
//! use idiom_bench::observe::RecordingObserver;
//! use idiom_bench::source::SourceArray;
//! use idiom_bench::transform::{apply, Strategy};
//!
//! let mut runner = BenchmarkRunner::new(SourceArray::new(1_000), RecordingObserver::new());
//! let result = runner
//!     .run("Fast fix", || {
//!         |source: &SourceArray, counter: &mut Counter| apply(Strategy::Fold, source, counter)
//!     })
//!     .unwrap();
//! assert!(result.passed);
//! ```
//!
//! [`SourceArray`]: crate::source::SourceArray
//! [`Counter`]: crate::counter::Counter

mod case;
mod error;
mod result;
mod runner;
mod suite;

pub use case::{Factory, TestCase, TestFn};
pub use error::{BenchError, BenchResult};
pub use result::BenchmarkResult;
pub use runner::BenchmarkRunner;
pub use suite::BenchmarkSuite;
