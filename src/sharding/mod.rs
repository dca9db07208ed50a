//! Job sharding: each task of a parallel job picks its own batch of work.

mod env;
mod error;

#[cfg(test)]
mod tests;

pub use env::{TASK_COUNT_VAR, TASK_INDEX_VAR, TaskEnv};
pub use error::ShardError;

use crate::slicer::batches;

/// Select the batch of `tasks` owned by the task described in `env`.
///
/// The tasks are split into `env.count` batches and the batch at `env.index` is
/// returned. An empty task list is an error, as is an index outside the
/// produced batches.
pub fn select_batch<'a, T>(tasks: &'a [T], env: &TaskEnv) -> Result<&'a [T], ShardError> {
    if tasks.is_empty() {
        return Err(ShardError::TaskListEmpty);
    }

    let mut all = batches(tasks, env.count);
    let max = all.len();
    let out_of_bounds = || ShardError::TaskIndexOutOfBounds {
        index: env.index,
        max,
    };

    let index = usize::try_from(env.index).map_err(|_| out_of_bounds())?;
    let batch = all.nth(index).ok_or_else(out_of_bounds)?;

    tracing::debug!(
        tasks = tasks.len(),
        count = env.count,
        index = env.index,
        size = batch.len(),
        "selected batch"
    );
    Ok(batch)
}

/// Select this process's batch using the Cloud Run task environment.
///
/// The task list is checked before the environment is read.
pub fn cloud_run_batch<T>(tasks: &[T]) -> Result<&[T], ShardError> {
    if tasks.is_empty() {
        return Err(ShardError::TaskListEmpty);
    }
    let env = TaskEnv::from_env()?;
    select_batch(tasks, &env)
}
