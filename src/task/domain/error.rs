//! Error types for task domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or editing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task note is empty after trimming.
    #[error("task text must not be empty")]
    EmptyText,

    /// The color key does not belong to the status catalog.
    #[error("unknown task status: {0}")]
    UnknownStatus(String),

    /// Two tasks in one list share an identifier.
    #[error("duplicate task id: {0}")]
    DuplicateId(TaskId),

    /// No identifier above the highest one in use is left to allocate.
    #[error("task id space exhausted after {0}")]
    IdSpaceExhausted(TaskId),
}
