use serde::{Deserialize, Serialize};

use super::ShardError;

/// Environment variable holding the number of tasks in a Cloud Run job
pub const TASK_COUNT_VAR: &str = "CLOUD_RUN_TASK_COUNT";

/// Environment variable holding the zero-based index of the current task
pub const TASK_INDEX_VAR: &str = "CLOUD_RUN_TASK_INDEX";

/// Task layout of the running job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEnv {
    /// Number of tasks, used as the batch count
    pub count: i64,
    /// Index of this task, selects the batch
    pub index: i64,
}

impl TaskEnv {
    pub fn new(count: i64, index: i64) -> Self {
        Self { count, index }
    }

    /// Read the task layout from the process environment
    pub fn from_env() -> Result<Self, ShardError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the task layout through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ShardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let count = parse_var(&lookup, TASK_COUNT_VAR)?;
        let index = parse_var(&lookup, TASK_INDEX_VAR)?;
        tracing::debug!(count, index, "loaded task layout");
        Ok(Self { count, index })
    }
}

fn parse_var<F>(lookup: &F, var: &'static str) -> Result<i64, ShardError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var).ok_or(ShardError::MissingVar { var })?;
    value
        .parse()
        .map_err(|source| ShardError::InvalidVar { var, value, source })
}
