//! Search and status filtering.

use crate::task::domain::{Task, TaskDomainError, TaskStatus};
use std::fmt;

/// Sentinel accepted by [`StatusFilter::parse`] to disable status filtering.
pub const ALL_STATUSES: &str = "All";

/// Status predicate applied on top of the search predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Every status passes.
    #[default]
    All,
    /// Only tasks with exactly this status pass.
    Only(TaskStatus),
}

impl StatusFilter {
    /// Parses the sentinel `"All"` or a catalog color key.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownStatus`] for any other value.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        if value == ALL_STATUSES {
            return Ok(Self::All);
        }
        TaskStatus::from_color_key(value).map(Self::Only)
    }

    /// Returns the sentinel or color key this filter was parsed from.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => ALL_STATUSES,
            Self::Only(status) => status.color_key(),
        }
    }

    /// Returns `true` when `status` passes the filter.
    #[must_use]
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl From<TaskStatus> for StatusFilter {
    fn from(status: TaskStatus) -> Self {
        Self::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks whether an already-lowercased needle occurs in the task's title,
/// note, or status label, ignoring case.
///
/// An empty needle matches every task.
#[must_use]
pub fn matches_search(task: &Task, needle: &str) -> bool {
    [task.title(), task.text(), task.status().label()]
        .into_iter()
        .any(|haystack| haystack.to_lowercase().contains(needle))
}

/// Returns the tasks matching both the search query and the status filter.
///
/// The query is used raw, without trimming. The result keeps the input
/// order and borrows from `tasks`.
#[must_use]
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    search_query: &str,
    status_filter: StatusFilter,
) -> Vec<&'a Task> {
    let needle = search_query.to_lowercase();
    tasks
        .iter()
        .filter(|task| matches_search(task, &needle) && status_filter.matches(task.status()))
        .collect()
}
