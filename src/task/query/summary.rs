//! Progress summary over the full task list.

use crate::task::domain::{Task, TaskStatus};
use std::collections::BTreeMap;

/// Aggregate counts for the progress panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    total: usize,
    counts: BTreeMap<TaskStatus, usize>,
    completed_percentage: u8,
}

impl TaskSummary {
    /// Returns the number of tasks summarized.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns how many tasks carry `status`.
    #[must_use]
    pub fn count(&self, status: TaskStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or_default()
    }

    /// Iterates over every catalog status and its count, in display order.
    pub fn counts(&self) -> impl Iterator<Item = (TaskStatus, usize)> + '_ {
        self.counts.iter().map(|(status, count)| (*status, *count))
    }

    /// Returns the counts keyed by color key.
    #[must_use]
    pub fn counts_by_color(&self) -> BTreeMap<&'static str, usize> {
        self.counts()
            .map(|(status, count)| (status.color_key(), count))
            .collect()
    }

    /// Returns the share of completed tasks, in whole percent.
    #[must_use]
    pub const fn completed_percentage(&self) -> u8 {
        self.completed_percentage
    }
}

/// Summarizes a task list.
///
/// Every catalog status is present in the counts, zero when unused. The
/// completed percentage is rounded half up and is `0` for an empty list.
#[must_use]
pub fn summarize(tasks: &[Task]) -> TaskSummary {
    let mut counts: BTreeMap<TaskStatus, usize> =
        TaskStatus::ALL.into_iter().map(|status| (status, 0)).collect();
    for task in tasks {
        *counts.entry(task.status()).or_default() += 1;
    }

    let total = tasks.len();
    let completed = counts
        .get(&TaskStatus::Completed)
        .copied()
        .unwrap_or_default();

    TaskSummary {
        total,
        counts,
        completed_percentage: rounded_percentage(completed, total),
    }
}

/// Computes `round(100 * part / total)` with halves rounded up, in integer
/// arithmetic. Returns `0` when `total` is zero.
///
/// Exact halves always round up. A floating-point `round(part / total * 100)`
/// can land just below the half and round down instead: 29 of 200 gives 15
/// here but 14 in binary floating point.
fn rounded_percentage(part: usize, total: usize) -> u8 {
    let numerator = part.saturating_mul(200).saturating_add(total);
    let denominator = total.saturating_mul(2);
    numerator
        .checked_div(denominator)
        .map_or(0, |percent| u8::try_from(percent).unwrap_or(u8::MAX))
}
