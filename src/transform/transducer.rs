//! Composable reducer transformations.
//!
//! A [`Transducer`] wraps a downstream [`Reducer`] into a new reducer. Stages
//! compose without knowing the target collection, and [`transduce`] drives the
//! whole chain with a single fold, so no intermediate sequences are built.
//!
//! ```
//! use idiom_bench::transform::transducer::{append, compose, transduce, Filter, Map};
//!
//! let xform = compose(Map::new(|x: u32| x * 3), Filter::new(|x: &u32| x % 2 == 0));
//! let out = transduce(xform, append(), Vec::new(), 1..=6);
//! assert_eq!(out, vec![6, 12, 18]);
//! ```

/// One reduction step: fold `item` into `acc`.
pub trait Reducer<In, Acc> {
    /// Combine the accumulator with the next input.
    fn step(&mut self, acc: Acc, item: In) -> Acc;
}

/// Turns a downstream reducer into an upstream one.
pub trait Transducer<R> {
    /// The reducer produced by wrapping `R`.
    type Reducer;

    /// Wrap `downstream`.
    fn wrap(self, downstream: R) -> Self::Reducer;
}

/// Adapts a plain closure into the terminal reducer of a chain.
#[derive(Debug, Clone)]
pub struct Reducing<F>(F);

/// Wrap `f` as a terminal reducer.
pub fn reducing<F>(f: F) -> Reducing<F> {
    Reducing(f)
}

impl<In, Acc, F> Reducer<In, Acc> for Reducing<F>
where
    F: FnMut(Acc, In) -> Acc,
{
    fn step(&mut self, acc: Acc, item: In) -> Acc {
        (self.0)(acc, item)
    }
}

/// Terminal reducer that pushes every input onto a `Vec`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Append;

/// Build an [`Append`] reducer.
pub fn append() -> Append {
    Append
}

impl<T> Reducer<T, Vec<T>> for Append {
    fn step(&mut self, mut acc: Vec<T>, item: T) -> Vec<T> {
        acc.push(item);
        acc
    }
}

/// Mapping stage.
#[derive(Debug, Clone)]
pub struct Map<F>(F);

impl<F> Map<F> {
    /// Map every input through `f`.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

/// Filtering stage.
#[derive(Debug, Clone)]
pub struct Filter<P>(P);

impl<P> Filter<P> {
    /// Forward only inputs matching `predicate`.
    pub fn new(predicate: P) -> Self {
        Self(predicate)
    }
}

/// Reducer produced by [`Map`].
#[derive(Debug, Clone)]
pub struct Mapping<F, R> {
    f: F,
    downstream: R,
}

/// Reducer produced by [`Filter`].
#[derive(Debug, Clone)]
pub struct Filtering<P, R> {
    predicate: P,
    downstream: R,
}

impl<F, R> Transducer<R> for Map<F> {
    type Reducer = Mapping<F, R>;

    fn wrap(self, downstream: R) -> Self::Reducer {
        Mapping {
            f: self.0,
            downstream,
        }
    }
}

impl<P, R> Transducer<R> for Filter<P> {
    type Reducer = Filtering<P, R>;

    fn wrap(self, downstream: R) -> Self::Reducer {
        Filtering {
            predicate: self.0,
            downstream,
        }
    }
}

impl<In, Out, Acc, F, R> Reducer<In, Acc> for Mapping<F, R>
where
    F: FnMut(In) -> Out,
    R: Reducer<Out, Acc>,
{
    fn step(&mut self, acc: Acc, item: In) -> Acc {
        let mapped = (self.f)(item);
        self.downstream.step(acc, mapped)
    }
}

impl<In, Acc, P, R> Reducer<In, Acc> for Filtering<P, R>
where
    P: FnMut(&In) -> bool,
    R: Reducer<In, Acc>,
{
    fn step(&mut self, acc: Acc, item: In) -> Acc {
        if (self.predicate)(&item) {
            self.downstream.step(acc, item)
        } else {
            acc
        }
    }
}

/// Two stages chained; data passes through `outer` first.
#[derive(Debug, Clone)]
pub struct Compose<A, B> {
    outer: A,
    inner: B,
}

/// Chain two transducers. Inputs flow through `outer`, then `inner`.
pub fn compose<A, B>(outer: A, inner: B) -> Compose<A, B> {
    Compose { outer, inner }
}

impl<A, B, R> Transducer<R> for Compose<A, B>
where
    B: Transducer<R>,
    A: Transducer<B::Reducer>,
{
    type Reducer = A::Reducer;

    fn wrap(self, downstream: R) -> Self::Reducer {
        self.outer.wrap(self.inner.wrap(downstream))
    }
}

/// Run `source` through `xform` into `reducer`, starting from `init`.
///
/// The source is traversed exactly once.
pub fn transduce<T, R, Acc, I>(xform: T, reducer: R, init: Acc, source: I) -> Acc
where
    I: IntoIterator,
    T: Transducer<R>,
    T::Reducer: Reducer<I::Item, Acc>,
{
    let mut chain = xform.wrap(reducer);
    source
        .into_iter()
        .fold(init, |acc, item| chain.step(acc, item))
}
