//! # Transform Strategies
//!
//! Every strategy computes the same thing: step the counter once per source
//! element, halve the counter value, and keep only the halves that are whole
//! numbers. They differ only in how they iterate and where they allocate.
//!
//! ## Example
//!
//! ```rust
//! use idiom_bench::counter::Counter;
//! use idiom_bench::source::SourceArray;
//! use idiom_bench::transform::{apply, Strategy};
//!
//! let source = SourceArray::new(6);
//! let mut counter = Counter::new();
//! let out = apply(Strategy::Transducer, &source, &mut counter);
//! assert_eq!(out, vec![1.0, 2.0, 3.0]);
//! assert_eq!(counter.value(), 6);
//! ```

pub mod lazy;
pub mod transducer;

use crate::counter::Counter;
use crate::source::{Element, SourceArray};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Halve a counter value.
#[must_use]
pub fn halve(x: u64) -> f64 {
    x as f64 / 2.0
}

/// Whether `x` has no fractional part.
#[must_use]
pub fn is_int(x: f64) -> bool {
    x.floor() == x
}

/// Iteration style used to run the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Three chained passes, each collected into a fresh vector.
    Chained,
    /// One fold pushing into the accumulator.
    Fold,
    /// Per-element pipeline, accumulator rebuilt by concatenation every step.
    ConcatPerElement,
    /// Per-element pipeline folded with push.
    PushPerElement,
    /// Per-element pipeline driven by an index loop.
    IndexedLoop,
    /// Pull-based adapters drained at the end.
    Lazy,
    /// Composed transducer stages run in one fused fold.
    Transducer,
    /// Single-pass iterator chain.
    Fused,
}

impl Strategy {
    /// Every strategy in run order.
    pub const ALL: [Strategy; 8] = [
        Strategy::Chained,
        Strategy::Fold,
        Strategy::ConcatPerElement,
        Strategy::PushPerElement,
        Strategy::IndexedLoop,
        Strategy::Lazy,
        Strategy::Transducer,
        Strategy::Fused,
    ];

    /// Label used for timing and reports.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Chained => "Simple",
            Self::Fold => "Fast fix",
            Self::ConcatPerElement => "Transform 0 (shamefully slow)",
            Self::PushPerElement => "Transform 1 (using push)",
            Self::IndexedLoop => "Transform 2 (semi-imperative)",
            Self::Lazy => "Generators",
            Self::Transducer => "Transducers",
            Self::Fused => "Iterator chain (fused)",
        }
    }

    /// Name used in configuration files.
    #[must_use]
    pub fn config_name(&self) -> &'static str {
        match self {
            Self::Chained => "chained",
            Self::Fold => "fold",
            Self::ConcatPerElement => "concat-per-element",
            Self::PushPerElement => "push-per-element",
            Self::IndexedLoop => "indexed-loop",
            Self::Lazy => "lazy",
            Self::Transducer => "transducer",
            Self::Fused => "fused",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Run `strategy` over `source`, stepping `counter` once per element.
pub fn apply(strategy: Strategy, source: &SourceArray, counter: &mut Counter) -> Vec<f64> {
    let elements = source.as_slice();
    match strategy {
        Strategy::Chained => chained(elements, counter),
        Strategy::Fold => fold(elements, counter),
        Strategy::ConcatPerElement => concat_per_element(elements, counter),
        Strategy::PushPerElement => push_per_element(elements, counter),
        Strategy::IndexedLoop => indexed_loop(elements, counter),
        Strategy::Lazy => lazy_pull(elements, counter),
        Strategy::Transducer => transduced(elements, counter),
        Strategy::Fused => fused(elements, counter),
    }
}

fn chained(elements: &[Element], counter: &mut Counter) -> Vec<f64> {
    let nums: Vec<u64> = elements.iter().map(|_| counter.step()).collect();
    let halves: Vec<f64> = nums.into_iter().map(halve).collect();
    halves.into_iter().filter(|&h| is_int(h)).collect()
}

fn fold(elements: &[Element], counter: &mut Counter) -> Vec<f64> {
    elements.iter().fold(Vec::new(), |mut out, _| {
        let hlv = halve(counter.step());
        if is_int(hlv) {
            out.push(hlv);
        }
        out
    })
}

fn concat_per_element(elements: &[Element], counter: &mut Counter) -> Vec<f64> {
    elements.iter().fold(Vec::new(), |out, member| {
        let t = chained(std::slice::from_ref(member), counter);
        [out, t].concat()
    })
}

fn push_per_element(elements: &[Element], counter: &mut Counter) -> Vec<f64> {
    elements.iter().fold(Vec::new(), |mut out, member| {
        let t = chained(std::slice::from_ref(member), counter);
        if let Some(&first) = t.first() {
            out.push(first);
        }
        out
    })
}

#[allow(clippy::needless_range_loop)]
fn indexed_loop(elements: &[Element], counter: &mut Counter) -> Vec<f64> {
    let mut out = Vec::new();
    for i in 0..elements.len() {
        let t = chained(&elements[i..=i], counter);
        if let Some(&first) = t.first() {
            out.push(first);
        }
    }
    out
}

fn lazy_pull(elements: &[Element], counter: &mut Counter) -> Vec<f64> {
    let nums = lazy::map(elements, |_| counter.step());
    let hlv = lazy::map(nums, halve);
    lazy::filter(hlv, |&h| is_int(h)).collect()
}

fn transduced(elements: &[Element], counter: &mut Counter) -> Vec<f64> {
    use transducer::{append, compose, transduce, Filter, Map};

    let xform = compose(
        Map::new(|_: &Element| counter.step()),
        compose(Map::new(halve), Filter::new(|h: &f64| is_int(*h))),
    );
    transduce(xform, append(), Vec::new(), elements)
}

fn fused(elements: &[Element], counter: &mut Counter) -> Vec<f64> {
    elements
        .iter()
        .map(|_| counter.step())
        .map(halve)
        .filter(|&h| is_int(h))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halve_and_is_int() {
        assert_eq!(halve(4), 2.0);
        assert_eq!(halve(1), 0.5);
        assert!(is_int(2.0));
        assert!(!is_int(0.5));
        assert!(is_int(0.0));
    }

    #[test]
    fn test_every_strategy_matches_expected_output() {
        let source = SourceArray::new(101);
        let expected = source.expected_result();
        for strategy in Strategy::ALL {
            let mut counter = Counter::new();
            let out = apply(strategy, &source, &mut counter);
            assert_eq!(out, expected, "{strategy} produced the wrong output");
            assert_eq!(counter.value(), 101, "{strategy} stepped the counter wrongly");
        }
    }

    #[test]
    fn test_empty_and_single_element_sources() {
        for len in [0, 1] {
            let source = SourceArray::new(len);
            for strategy in Strategy::ALL {
                let mut counter = Counter::new();
                assert!(apply(strategy, &source, &mut counter).is_empty());
                assert_eq!(counter.value(), len as u64);
            }
        }
    }

    #[test]
    fn test_output_depends_on_counter_start() {
        // A counter that was not reset shifts which steps are even.
        let source = SourceArray::new(4);
        let mut counter = Counter::new();
        counter.step();
        let out = apply(Strategy::Fused, &source, &mut counter);
        assert_eq!(out, vec![1.0, 2.0]);
        assert_eq!(counter.value(), 5);
    }

    #[test]
    fn test_titles_are_unique() {
        let mut titles: Vec<_> = Strategy::ALL.iter().map(Strategy::title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), Strategy::ALL.len());
    }

    #[test]
    fn test_config_name_matches_serde() {
        for strategy in Strategy::ALL {
            let json = serde_json::to_string(&strategy).unwrap();
            assert_eq!(json, format!("\"{}\"", strategy.config_name()));
        }
    }
}
