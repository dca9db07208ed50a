use std::iter::FusedIterator;

use super::{batch_count, bounds};

/// Lazy iterator over the batches of a slice.
///
/// Yields exactly the same batches as [`slice`](super::slice), one at a time.
#[derive(Debug)]
pub struct Batches<'a, T> {
    items: &'a [T],
    count: usize,
    front: usize,
    back: usize,
}

/// Iterate over `items` split into `n` near-equal contiguous batches.
pub fn batches<T>(items: &[T], n: i64) -> Batches<'_, T> {
    let count = batch_count(n);
    tracing::trace!(len = items.len(), count, "slicing into batches");
    Batches {
        items,
        count,
        front: 0,
        back: count,
    }
}

impl<T> Clone for Batches<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Batches<'a, T> {
    /// Total number of batches, including the ones already yielded.
    pub fn batch_count(&self) -> usize {
        self.count
    }

    fn batch(&self, i: usize) -> &'a [T] {
        &self.items[bounds(self.items.len(), self.count, i)]
    }
}

impl<'a, T> Iterator for Batches<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let batch = self.batch(self.front);
        self.front += 1;
        Some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.back - self.front {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }
}

impl<T> DoubleEndedIterator for Batches<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.batch(self.back))
    }
}

impl<T> ExactSizeIterator for Batches<'_, T> {}

impl<T> FusedIterator for Batches<'_, T> {}
