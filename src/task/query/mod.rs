//! Derived views over a task-list snapshot.
//!
//! Everything here is a pure function of the tasks passed in: filtering by
//! search text and status, and aggregate counts for the progress summary.

mod filter;
mod summary;

pub use filter::{ALL_STATUSES, StatusFilter, filter_tasks, matches_search};
pub use summary::{TaskSummary, summarize};
