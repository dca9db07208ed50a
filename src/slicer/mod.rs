mod ext;
mod iter;
mod partition;


pub use ext::EvenSlice;
pub use iter::{Batches, batches};
#[allow(deprecated)]
pub use partition::{batch_slice, bounds, slice, slice_mut, slice_owned};

/// Number of batches produced for a requested count.
///
/// Zero and negative counts produce no batches at all.
pub(crate) fn batch_count(n: i64) -> usize {
    if n <= 0 {
        0
    } else {
        usize::try_from(n).unwrap_or(usize::MAX)
    }
}
