// Public API exports
pub mod sharding;
pub mod slicer;

// Re-export main types for convenience
pub use slicer::{Batches, EvenSlice, batches, bounds, slice, slice_mut, slice_owned};

#[allow(deprecated)]
pub use slicer::batch_slice;

pub use sharding::{ShardError, TaskEnv, cloud_run_batch, select_batch};
