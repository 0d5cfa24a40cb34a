//! Iterator over the elements of an iterable success payload.

use core::iter::FusedIterator;

/// Iterator returned by [`Outcome::iter`](crate::Outcome::iter).
///
/// Yields the elements of a `Success` payload's iterator, or nothing for a
/// `Failure`.
#[derive(Clone, Debug)]
pub struct OutcomeIter<I> {
    inner: Option<I>,
}

impl<I> OutcomeIter<I> {
    #[inline]
    pub(crate) fn new(inner: Option<I>) -> Self {
        Self { inner }
    }
}

impl<I: Iterator> Iterator for OutcomeIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(iter) => iter.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<I: FusedIterator> FusedIterator for OutcomeIter<I> {}
