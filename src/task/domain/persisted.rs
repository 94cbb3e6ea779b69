//! JSON representation of the persisted task list.
//!
//! The list is stored as one JSON array of task records. Decoding is lenient:
//! a value that is not an array yields an error for the caller to degrade on,
//! while individual records that do not decode are skipped and reported.

use super::{Task, TaskId};
use serde_json::Value;
use std::collections::HashSet;

/// Reason a stored record was dropped while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkippedRecord {
    /// The record does not have the task shape (missing fields, wrong types,
    /// or a color outside the catalog).
    Malformed {
        /// Position of the record in the stored array.
        index: usize,
        /// Decoder message.
        reason: String,
    },
    /// The record reuses the identifier of an earlier record.
    DuplicateId {
        /// Position of the record in the stored array.
        index: usize,
        /// The repeated identifier.
        id: TaskId,
    },
}

/// Outcome of decoding a stored task list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedTaskList {
    /// Tasks that decoded cleanly, in stored order.
    pub tasks: Vec<Task>,
    /// Records that were dropped.
    pub skipped: Vec<SkippedRecord>,
}

/// Serializes a task list to its persisted JSON form.
///
/// # Errors
///
/// Returns the serializer error; with the task shape this only happens on
/// allocation-level failures inside `serde_json`.
pub fn encode_task_list(tasks: &[Task]) -> serde_json::Result<String> {
    serde_json::to_string(tasks)
}

/// Returns the first identifier that appears more than once in `tasks`.
#[must_use]
pub fn find_duplicate_id(tasks: &[Task]) -> Option<TaskId> {
    let mut seen = HashSet::with_capacity(tasks.len());
    tasks.iter().map(Task::id).find(|id| !seen.insert(*id))
}

/// Parses a persisted JSON task list.
///
/// # Errors
///
/// Returns the parser error when the value is not a JSON array.
pub fn decode_task_list(raw: &str) -> serde_json::Result<DecodedTaskList> {
    let records: Vec<Value> = serde_json::from_str(raw)?;
    let mut decoded = DecodedTaskList::default();
    let mut seen = HashSet::new();

    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Task>(record) {
            Ok(task) if seen.insert(task.id()) => decoded.tasks.push(task),
            Ok(task) => decoded.skipped.push(SkippedRecord::DuplicateId {
                index,
                id: task.id(),
            }),
            Err(err) => decoded.skipped.push(SkippedRecord::Malformed {
                index,
                reason: err.to_string(),
            }),
        }
    }

    Ok(decoded)
}
