use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShardError {
    #[error("task not found")]
    TaskListEmpty,

    #[error("index ({index}) out of bounds (max: {max})")]
    TaskIndexOutOfBounds { index: i64, max: usize },

    #[error("environment variable {var} is not set")]
    MissingVar { var: &'static str },

    #[error("environment variable {var}={value:?} is not an integer: {source}")]
    InvalidVar {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
