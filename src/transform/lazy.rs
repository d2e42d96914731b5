//! Pull-based adapters.
//!
//! Each adapter holds its upstream iterator and produces one element per
//! `next()` call. Nothing runs until the consumer pulls. A drained pipeline
//! stays drained; build a new one to start over.

/// Yields `f(item)` for every upstream item.
#[derive(Debug, Clone)]
#[must_use = "adapters do nothing until pulled"]
pub struct Map<I, F> {
    upstream: I,
    f: F,
}

/// Yields upstream items for which `predicate` holds.
#[derive(Debug, Clone)]
#[must_use = "adapters do nothing until pulled"]
pub struct Filter<I, P> {
    upstream: I,
    predicate: P,
}

/// Wrap `upstream` so each pulled item is passed through `f`.
pub fn map<I, F, B>(upstream: I, f: F) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    Map {
        upstream: upstream.into_iter(),
        f,
    }
}

/// Wrap `upstream` so only items matching `predicate` are yielded.
pub fn filter<I, P>(upstream: I, predicate: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filter {
        upstream: upstream.into_iter(),
        predicate,
    }
}

impl<I, F, B> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        let item = self.upstream.next()?;
        Some((self.f)(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.upstream.next()?;
            if (self.predicate)(&item) {
                // yield the tested value itself
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.upstream.size_hint().1)
    }
}
