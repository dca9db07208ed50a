use super::{Batches, batches, slice};

/// Slice extension trait
pub trait EvenSlice<T> {
    /// Iterate over `n` near-equal contiguous batches
    fn even_batches(&self, n: i64) -> Batches<'_, T>;

    /// Collect `n` near-equal contiguous batches
    fn even_slice(&self, n: i64) -> Vec<&[T]>;
}

impl<T> EvenSlice<T> for [T] {
    fn even_batches(&self, n: i64) -> Batches<'_, T> {
        batches(self, n)
    }

    fn even_slice(&self, n: i64) -> Vec<&[T]> {
        slice(self, n)
    }
}
