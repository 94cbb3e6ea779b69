//! Detail/edit dialog state for a single task.
//!
//! Models the flow an interaction layer drives when a task card is opened:
//! view it, switch to editing a draft, then save or delete behind a
//! confirmation step. Committed deletes and saves dismiss the dialog.

use super::{TaskStore, TaskStoreResult};
use crate::task::{
    domain::{Task, TaskFields, TaskId},
    ports::{ConfirmationGate, ConfirmationRequest, KeyValueStorage},
};
use mockable::Clock;
use std::sync::Arc;

/// What the dialog currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailView {
    /// No task is open.
    #[default]
    Closed,
    /// A task is shown read-only.
    Viewing(TaskId),
    /// A task is being edited.
    Editing {
        /// The task under edit.
        id: TaskId,
        /// Unsaved field values.
        draft: TaskFields,
    },
}

impl DetailView {
    /// Returns the open task's identifier, if any.
    #[must_use]
    pub const fn task_id(&self) -> Option<TaskId> {
        match self {
            Self::Closed => None,
            Self::Viewing(id) | Self::Editing { id, .. } => Some(*id),
        }
    }
}

/// Result of a confirmed-action request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    /// The action was carried out; holds the saved or removed task.
    Applied(Task),
    /// The user declined; nothing changed.
    Declined,
    /// The open task no longer exists; the dialog was closed.
    Missing,
    /// No task was open, or the action does not apply in the current view.
    NotApplicable,
}

/// Dialog session bound to a store and a confirmation gate.
pub struct TaskDetailSession<S, C, G>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
    G: ConfirmationGate,
{
    store: Arc<TaskStore<S, C>>,
    gate: Arc<G>,
    view: DetailView,
}

impl<S, C, G> TaskDetailSession<S, C, G>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
    G: ConfirmationGate,
{
    /// Creates a closed session.
    #[must_use]
    pub const fn new(store: Arc<TaskStore<S, C>>, gate: Arc<G>) -> Self {
        Self {
            store,
            gate,
            view: DetailView::Closed,
        }
    }

    /// Returns the current view.
    #[must_use]
    pub const fn view(&self) -> &DetailView {
        &self.view
    }

    /// Returns the open task as currently stored.
    #[must_use]
    pub fn open_task(&self) -> Option<Task> {
        self.view.task_id().and_then(|id| self.store.get(id))
    }

    /// Opens a task read-only, discarding any draft.
    ///
    /// Returns `None` and leaves the view unchanged when the task does not
    /// exist.
    pub fn open(&mut self, id: TaskId) -> Option<Task> {
        let task = self.store.get(id)?;
        self.view = DetailView::Viewing(id);
        Some(task)
    }

    /// Switches to editing, seeding the draft from the stored task.
    ///
    /// An existing draft is kept. Returns `None` when nothing is open; if the
    /// open task has disappeared the dialog is closed.
    pub fn start_edit(&mut self) -> Option<&mut TaskFields> {
        if let DetailView::Viewing(id) = self.view {
            let Some(task) = self.store.get(id) else {
                self.close();
                return None;
            };
            self.view = DetailView::Editing {
                id,
                draft: task.fields(),
            };
        }
        self.draft_mut()
    }

    /// Returns the draft while editing.
    pub const fn draft_mut(&mut self) -> Option<&mut TaskFields> {
        match &mut self.view {
            DetailView::Editing { draft, .. } => Some(draft),
            DetailView::Closed | DetailView::Viewing(_) => None,
        }
    }

    /// Saves the draft after confirmation.
    ///
    /// On a decline the draft stays open for further editing.
    ///
    /// # Errors
    ///
    /// Returns the store error when the update is rejected or cannot be
    /// persisted; the draft stays open.
    pub async fn save_edit(&mut self) -> TaskStoreResult<DetailOutcome> {
        let DetailView::Editing { id, draft } = &self.view else {
            return Ok(DetailOutcome::NotApplicable);
        };
        let (id, draft) = (*id, draft.clone());

        let decision = self.gate.confirm(ConfirmationRequest::ApplyEdit(id)).await;
        if !decision.is_confirmed() {
            return Ok(DetailOutcome::Declined);
        }

        let outcome = match self.store.update_fields(id, draft).await? {
            Some(task) => DetailOutcome::Applied(task),
            None => DetailOutcome::Missing,
        };
        self.close();
        Ok(outcome)
    }

    /// Deletes the open task after confirmation.
    ///
    /// # Errors
    ///
    /// Returns the store error when the removal cannot be persisted; the
    /// dialog stays open.
    pub async fn delete_open(&mut self) -> TaskStoreResult<DetailOutcome> {
        let Some(id) = self.view.task_id() else {
            return Ok(DetailOutcome::NotApplicable);
        };

        let decision = self.gate.confirm(ConfirmationRequest::DeleteTask(id)).await;
        if !decision.is_confirmed() {
            return Ok(DetailOutcome::Declined);
        }

        let outcome = match self.store.delete(id).await? {
            Some(task) => DetailOutcome::Applied(task),
            None => DetailOutcome::Missing,
        };
        self.close();
        Ok(outcome)
    }

    /// Closes the dialog, discarding any draft.
    pub fn close(&mut self) {
        self.view = DetailView::Closed;
    }

    /// Closes the dialog if the open task was removed elsewhere.
    ///
    /// Returns `true` when the dialog was closed by this call.
    pub fn sync(&mut self) -> bool {
        match self.view.task_id() {
            Some(id) if self.store.get(id).is_none() => {
                self.close();
                true
            }
            _ => false,
        }
    }
}
