use std::ops::Range;

use super::{batch_count, batches};

/// Range of positions covered by batch `i` when `len` items are split into `n` batches.
///
/// Boundaries are `floor(i * len / n)` and `floor((i + 1) * len / n)`, computed in
/// 128-bit arithmetic so the products never overflow. `n` must be non-zero and
/// `i` at most `n`.
pub fn bounds(len: usize, n: usize, i: usize) -> Range<usize> {
    let (len, n, i) = (len as u128, n as u128, i as u128);
    let lower = i * len / n;
    let upper = (i + 1) * len / n;
    lower as usize..upper as usize
}

/// Evenly slice `items` into `n` contiguous batches.
///
/// The size of each batch never deviates more than one from the average batch
/// size, and concatenating the batches in order gives back `items`. A zero or
/// negative `n` yields no batches. When `n` exceeds the number of items the
/// surplus batches are empty.
///
/// ```
/// let batches = batch::slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 3);
/// assert_eq!(batches.len(), 3);
/// assert_eq!(batches[0], [1, 2, 3]);
/// assert_eq!(batches[2], [7, 8, 9, 10]);
/// ```
pub fn slice<T>(items: &[T], n: i64) -> Vec<&[T]> {
    batches(items, n).collect()
}

/// Mutable variant of [`slice`]. The batches are disjoint borrows of `items`.
pub fn slice_mut<T>(mut items: &mut [T], n: i64) -> Vec<&mut [T]> {
    let count = batch_count(n);
    let len = items.len();
    let mut out = Vec::with_capacity(count);

    for i in 0..count {
        let size = bounds(len, count, i).len();
        let (head, tail) = std::mem::take(&mut items).split_at_mut(size);
        out.push(head);
        items = tail;
    }

    out
}

/// Owned variant of [`slice`].
///
/// Every batch is a fresh allocation sized to its own length, so growing one
/// batch never touches the storage of another.
pub fn slice_owned<T: Clone>(items: &[T], n: i64) -> Vec<Vec<T>> {
    batches(items, n)
        .map(|batch| {
            let mut owned = Vec::with_capacity(batch.len());
            owned.extend_from_slice(batch);
            owned
        })
        .collect()
}

/// Alias of [`slice`] kept for callers of the old name.
#[deprecated(note = "use `slice` instead")]
pub fn batch_slice<T>(items: &[T], n: i64) -> Vec<&[T]> {
    slice(items, n)
}
