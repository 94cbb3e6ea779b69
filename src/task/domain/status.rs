//! Fixed status catalog for tasks.
//!
//! Five statuses exist, always listed in the same display order. Each one is
//! identified on the wire by its color key; the serde representation of
//! [`TaskStatus`] is that color string.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status, one of the five catalog entries.
///
/// Variants are declared in display order, so the derived `Ord` sorts by
/// catalog position.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TaskStatus {
    /// Work is blocked or on hold. New tasks start here.
    #[default]
    #[serde(rename = "#FF8A8A")]
    Blocked,
    /// Work is under way.
    #[serde(rename = "#FFF8A6")]
    InProgress,
    /// Work is planned but not started.
    #[serde(rename = "#AFCBFF")]
    Upcoming,
    /// Work is finished.
    #[serde(rename = "#C7FFDA")]
    Completed,
    /// Work is nice-to-have.
    #[serde(rename = "#FFD1DC")]
    Optional,
}

impl TaskStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 5] = [
        Self::Blocked,
        Self::InProgress,
        Self::Upcoming,
        Self::Completed,
        Self::Optional,
    ];

    /// Returns the color key used as the status identifier in storage.
    #[must_use]
    pub const fn color_key(self) -> &'static str {
        match self {
            Self::Blocked => "#FF8A8A",
            Self::InProgress => "#FFF8A6",
            Self::Upcoming => "#AFCBFF",
            Self::Completed => "#C7FFDA",
            Self::Optional => "#FFD1DC",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blocked => "Blocked/On Hold",
            Self::InProgress => "In Progress",
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
            Self::Optional => "Optional",
        }
    }

    /// Returns the catalog descriptor for this status.
    #[must_use]
    pub const fn descriptor(self) -> StatusDescriptor {
        StatusDescriptor {
            status: self,
            color_key: self.color_key(),
            label: self.label(),
        }
    }

    /// Resolves a status from its color key.
    ///
    /// Matching is exact; color keys are opaque tokens.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownStatus`] when no catalog entry uses
    /// the given color key.
    pub fn from_color_key(color_key: &str) -> Result<Self, TaskDomainError> {
        Self::ALL
            .into_iter()
            .find(|status| status.color_key() == color_key)
            .ok_or_else(|| TaskDomainError::UnknownStatus(color_key.to_owned()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_color_key(value)
    }
}

/// Immutable (color, label) pair describing one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusDescriptor {
    /// The status this descriptor belongs to.
    pub status: TaskStatus,
    /// Opaque color token identifying the status.
    pub color_key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

/// Returns the five catalog entries in display order.
#[must_use]
pub const fn list_statuses() -> [StatusDescriptor; 5] {
    [
        TaskStatus::Blocked.descriptor(),
        TaskStatus::InProgress.descriptor(),
        TaskStatus::Upcoming.descriptor(),
        TaskStatus::Completed.descriptor(),
        TaskStatus::Optional.descriptor(),
    ]
}

/// Looks up the catalog entry for a color key.
///
/// Returns `None` when the color key is not part of the catalog.
#[must_use]
pub fn describe(color_key: &str) -> Option<StatusDescriptor> {
    TaskStatus::from_color_key(color_key)
        .ok()
        .map(TaskStatus::descriptor)
}
