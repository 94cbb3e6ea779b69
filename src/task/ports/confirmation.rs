//! Confirmation port for destructive or content-replacing actions.
//!
//! The task store never asks the user anything. Callers that want a yes/no
//! step before deleting or saving an edit go through a [`ConfirmationGate`]
//! and branch on the returned [`Decision`].

use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::fmt;

/// Action awaiting the user's approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfirmationRequest {
    /// Permanently remove a task.
    DeleteTask(TaskId),
    /// Replace a task's title, note and status with edited values.
    ApplyEdit(TaskId),
}

impl ConfirmationRequest {
    /// Returns the question shown to the user.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::DeleteTask(_) => "Are you sure you want to delete this task?",
            Self::ApplyEdit(_) => "Apply changes to this task?",
        }
    }

    /// Returns the task the request concerns.
    #[must_use]
    pub const fn task_id(self) -> TaskId {
        match self {
            Self::DeleteTask(id) | Self::ApplyEdit(id) => id,
        }
    }
}

impl fmt::Display for ConfirmationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prompt())
    }
}

/// The user's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Go ahead.
    Confirmed,
    /// Leave everything as it is.
    Declined,
}

impl Decision {
    /// Returns `true` for [`Decision::Confirmed`].
    #[must_use]
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

/// Yes/no confirmation contract implemented by the interaction layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    /// Asks the user to approve `request`.
    async fn confirm(&self, request: ConfirmationRequest) -> Decision;
}
