//! Task record and the editable field set.

use super::{TaskDomainError, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// Title shown for tasks whose title is empty.
pub const UNTITLED_TASK: &str = "Untitled Task";

/// Number of note characters shown in a card preview.
pub const PREVIEW_CHARS: usize = 80;

/// The three user-editable fields of a task.
///
/// Used both as the creation payload and as the replacement payload for
/// whole-task edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields {
    /// Task or activity name; may be empty.
    pub title: String,
    /// Details or progress note.
    pub text: String,
    /// Catalog status.
    pub status: TaskStatus,
}

impl TaskFields {
    /// Creates a field set.
    #[must_use]
    pub fn new(title: impl Into<String>, text: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            status,
        }
    }

    /// Checks that the note is non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyText`] when the note is empty or
    /// whitespace-only.
    pub fn validate_text(&self) -> Result<(), TaskDomainError> {
        if self.text.trim().is_empty() {
            return Err(TaskDomainError::EmptyText);
        }
        Ok(())
    }
}

/// A single tracked task.
///
/// The serde shape is the persisted record: `id`, `title`, `text` and the
/// status under the `color` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(default)]
    title: String,
    text: String,
    #[serde(rename = "color")]
    status: TaskStatus,
}

impl Task {
    /// Creates a new task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyText`] when the note is empty or
    /// whitespace-only.
    pub fn create(id: TaskId, fields: TaskFields) -> Result<Self, TaskDomainError> {
        fields.validate_text()?;
        Ok(Self::from_parts(id, fields))
    }

    /// Reconstructs a task without validation, for data that was already
    /// accepted once.
    #[must_use]
    pub fn from_parts(id: TaskId, fields: TaskFields) -> Self {
        let TaskFields {
            title,
            text,
            status,
        } = fields;
        Self {
            id,
            title,
            text,
            status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the raw title, possibly empty.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns a copy of the editable fields.
    #[must_use]
    pub fn fields(&self) -> TaskFields {
        TaskFields::new(self.title.clone(), self.text.clone(), self.status)
    }

    /// Returns the title, or [`UNTITLED_TASK`] when the title is empty.
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_TASK
        } else {
            &self.title
        }
    }

    /// Returns the note shortened to [`PREVIEW_CHARS`] characters, with a
    /// trailing ellipsis when it was cut.
    #[must_use]
    pub fn preview(&self) -> String {
        if self.text.chars().count() <= PREVIEW_CHARS {
            return self.text.clone();
        }
        let mut preview: String = self.text.chars().take(PREVIEW_CHARS).collect();
        preview.push_str("...");
        preview
    }

    /// Replaces the status.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Replaces title, text and status together.
    ///
    /// When `require_text` is set the note must be non-empty, matching the
    /// creation rule.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyText`] when `require_text` is set and
    /// the new note is empty; the task is left untouched.
    pub fn apply_fields(
        &mut self,
        fields: TaskFields,
        require_text: bool,
    ) -> Result<(), TaskDomainError> {
        if require_text {
            fields.validate_text()?;
        }
        let TaskFields {
            title,
            text,
            status,
        } = fields;
        self.title = title;
        self.text = text;
        self.status = status;
        Ok(())
    }
}
