//! # idiom-bench
//!
//! Microbenchmarks comparing array-processing idioms over a fixed-size
//! numeric source.
//!
//! Every test performs the same computation: step a counter once per source
//! element, halve the counter value, and keep the halves that are whole
//! numbers. A source of length `N` therefore always yields
//! `[1, 2, ..., floor(N / 2)]`. What varies is the iteration style: chained
//! passes with intermediate vectors, folds, per-element pipelines, pull-based
//! adapters, composed transducers, and a fused iterator chain.
//!
//! ## Architecture
//!
//! - [`counter`] and [`source`]: the shared state each test reads
//! - [`transform`]: the strategies, selected by [`transform::Strategy`]
//! - [`bench`]: [`bench::BenchmarkRunner`] times one invocation per test and
//!   checks the result length without aborting on mismatch
//! - [`observe`]: where timings and diagnostics go
//! - [`report`], [`config`], [`telemetry`]: driver plumbing

pub mod bench;
pub mod config;
pub mod counter;
pub mod observe;
pub mod report;
pub mod source;
pub mod telemetry;
pub mod transform;
