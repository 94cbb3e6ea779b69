//! Domain model for task tracking.
//!
//! Holds the status catalog, the task record, and the persisted list format.
//! No infrastructure concerns cross this boundary.

mod error;
mod ids;
mod persisted;
mod status;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use persisted::{
    DecodedTaskList, SkippedRecord, decode_task_list, encode_task_list, find_duplicate_id,
};
pub use status::{StatusDescriptor, TaskStatus, describe, list_statuses};
pub use task::{PREVIEW_CHARS, Task, TaskFields, UNTITLED_TASK};
