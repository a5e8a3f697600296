use std::iter::FusedIterator;
use std::slice;

/// An iterator over one partition of a [`SparseSet`](crate::SparseSet),
/// yielding elements by value.
///
/// Returned by [`SparseSet::iter`](crate::SparseSet::iter) and
/// [`SparseSet::iter_absent`](crate::SparseSet::iter_absent). It borrows the set,
/// so the set cannot be mutated while the iterator is alive.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    iter: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slice: &'a [T]) -> Self {
        Self { iter: slice.iter() }
    }
}

impl<'a, T: Copy> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T: Copy> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().copied()
    }
}

impl<'a, T: Copy> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Copy> FusedIterator for Iter<'a, T> {}
