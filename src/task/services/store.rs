//! Task store: the owned task list and its persistence.

use super::StoreConfig;
use crate::task::{
    domain::{
        Task, TaskDomainError, TaskFields, TaskId, TaskStatus, decode_task_list, encode_task_list,
        find_duplicate_id,
    },
    ports::{KeyValueStorage, StorageError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, watch};

/// Immutable view of the task list, newest task first.
pub type TaskSnapshot = Arc<[Task]>;

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The storage backend rejected the write.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The task list could not be encoded.
    #[error("failed to encode task list: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

#[derive(Debug, Default)]
struct StoreState {
    tasks: Vec<Task>,
    last_issued: Option<TaskId>,
}

impl StoreState {
    /// Raises the issued-id watermark to cover every task in `tasks`.
    fn observe_ids(&mut self, tasks: &[Task]) {
        let newest = tasks.iter().map(Task::id).max();
        self.last_issued = self.last_issued.max(newest);
    }
}

/// Owner of the task list.
///
/// Every mutation writes the complete new list to storage before it becomes
/// visible. If the write fails the in-memory list is left as it was, the
/// failure is logged, and the error is returned. Mutations hold the state
/// lock across the write, so persisted values never interleave.
///
/// Operations on an unknown task identifier are silent no-ops returning
/// `Ok(None)`.
pub struct TaskStore<S, C>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
{
    storage: Arc<S>,
    clock: Arc<C>,
    config: StoreConfig,
    state: Mutex<StoreState>,
    changes: watch::Sender<TaskSnapshot>,
}

impl<S, C> TaskStore<S, C>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
{
    /// Creates an empty store without reading storage.
    #[must_use]
    pub fn new(storage: Arc<S>, clock: Arc<C>, config: StoreConfig) -> Self {
        let (changes, _) = watch::channel(TaskSnapshot::from(Vec::new()));
        Self {
            storage,
            clock,
            config,
            state: Mutex::new(StoreState::default()),
            changes,
        }
    }

    /// Creates a store and loads the persisted list.
    pub async fn open(storage: Arc<S>, clock: Arc<C>, config: StoreConfig) -> Self {
        let store = Self::new(storage, clock, config);
        store.load().await;
        store
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Subscribes to list changes.
    ///
    /// The receiver holds the latest snapshot and is notified after every
    /// committed mutation or load.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TaskSnapshot> {
        self.changes.subscribe()
    }

    /// Returns the current task list.
    #[must_use]
    pub fn snapshot(&self) -> TaskSnapshot {
        Arc::clone(&self.changes.borrow())
    }

    /// Returns the task with the given identifier, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.changes
            .borrow()
            .iter()
            .find(|task| task.id() == id)
            .cloned()
    }

    /// Replaces the in-memory list with the persisted one.
    ///
    /// Never fails: a missing value, a read error, or a value that is not a
    /// JSON array all yield an empty list. Stored records that do not decode
    /// or repeat an earlier identifier are dropped. Each case is logged at
    /// `warn`.
    pub async fn load(&self) -> TaskSnapshot {
        let mut state = self.state.lock().await;
        let tasks = self.read_persisted().await;
        state.observe_ids(&tasks);
        state.tasks = tasks;
        tracing::debug!(count = state.tasks.len(), "task list loaded");
        self.publish(&state.tasks)
    }

    /// Writes `tasks` to storage in full and makes it the current list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] with
    /// [`TaskDomainError::DuplicateId`] when two tasks share an identifier,
    /// and [`TaskStoreError::Storage`] or [`TaskStoreError::Serialization`]
    /// when the list cannot be written. The current list is unchanged in
    /// every case.
    pub async fn save(&self, tasks: Vec<Task>) -> TaskStoreResult<TaskSnapshot> {
        if let Some(id) = find_duplicate_id(&tasks) {
            tracing::warn!(task_id = %id, "save rejected; duplicate task id");
            return Err(TaskDomainError::DuplicateId(id).into());
        }
        let mut state = self.state.lock().await;
        let snapshot = self.commit(&mut state, tasks).await?;
        state.observe_ids(&snapshot);
        Ok(snapshot)
    }

    /// Creates a task and puts it at the front of the list.
    ///
    /// The identifier is the current time in milliseconds, moved past the
    /// last identifier issued or loaded when the clock has not advanced.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] with
    /// [`TaskDomainError::EmptyText`] when the note is empty or
    /// whitespace-only, with [`TaskDomainError::IdSpaceExhausted`] when the
    /// highest identifier in use is `i64::MAX`, or a persistence error when
    /// the write fails. The store is unchanged in every case.
    pub async fn create(&self, fields: TaskFields) -> TaskStoreResult<Task> {
        let mut state = self.state.lock().await;
        let id = self.next_id(&state)?;
        let task = Task::create(id, fields)?;

        let mut tasks = Vec::with_capacity(state.tasks.len().saturating_add(1));
        tasks.push(task.clone());
        tasks.extend(state.tasks.iter().cloned());
        self.commit(&mut state, tasks).await?;
        state.last_issued = Some(id);

        tracing::debug!(task_id = %id, status = %task.status(), "task created");
        Ok(task)
    }

    /// Removes a task.
    ///
    /// Returns the removed task, or `None` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the write fails; the task stays in
    /// the list.
    pub async fn delete(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let mut state = self.state.lock().await;
        let Some(position) = state.tasks.iter().position(|task| task.id() == id) else {
            tracing::debug!(task_id = %id, "delete ignored; task not found");
            return Ok(None);
        };

        let mut tasks = state.tasks.clone();
        let removed = tasks.remove(position);
        self.commit(&mut state, tasks).await?;

        tracing::debug!(task_id = %id, "task deleted");
        Ok(Some(removed))
    }

    /// Changes a task's status.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the write fails.
    pub async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskStoreResult<Option<Task>> {
        self.modify(id, |task| {
            task.set_status(status);
            Ok(())
        })
        .await
    }

    /// Changes a task's status given a raw color key.
    ///
    /// A color key outside the catalog is ignored like an unknown task.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the write fails.
    pub async fn update_status_key(
        &self,
        id: TaskId,
        color_key: &str,
    ) -> TaskStoreResult<Option<Task>> {
        match TaskStatus::from_color_key(color_key) {
            Ok(status) => self.update_status(id, status).await,
            Err(error) => {
                tracing::warn!(task_id = %id, %error, "status change ignored");
                Ok(None)
            }
        }
    }

    /// Replaces a task's title, note and status together.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] with
    /// [`TaskDomainError::EmptyText`] when the configuration requires a note
    /// on edit and the new one is empty, or a persistence error when the
    /// write fails. The task is unchanged in both cases.
    pub async fn update_fields(
        &self,
        id: TaskId,
        fields: TaskFields,
    ) -> TaskStoreResult<Option<Task>> {
        let require_text = self.config.require_text_on_edit;
        self.modify(id, move |task| task.apply_fields(fields, require_text))
            .await
    }

    async fn modify<F>(&self, id: TaskId, apply: F) -> TaskStoreResult<Option<Task>>
    where
        F: FnOnce(&mut Task) -> Result<(), TaskDomainError>,
    {
        let mut state = self.state.lock().await;
        let mut tasks = state.tasks.clone();
        let Some(task) = tasks.iter_mut().find(|task| task.id() == id) else {
            tracing::debug!(task_id = %id, "update ignored; task not found");
            return Ok(None);
        };

        apply(task)?;
        let updated = task.clone();
        self.commit(&mut state, tasks).await?;

        tracing::debug!(task_id = %id, status = %updated.status(), "task updated");
        Ok(Some(updated))
    }

    fn next_id(&self, state: &StoreState) -> Result<TaskId, TaskDomainError> {
        let candidate = TaskId::from_timestamp(self.clock.utc());
        match state.last_issued {
            Some(last) if candidate <= last => last
                .successor()
                .ok_or(TaskDomainError::IdSpaceExhausted(last)),
            _ => Ok(candidate),
        }
    }

    /// Persists `tasks`, then installs and publishes them.
    async fn commit(
        &self,
        state: &mut StoreState,
        tasks: Vec<Task>,
    ) -> TaskStoreResult<TaskSnapshot> {
        self.persist(&tasks).await?;
        state.tasks = tasks;
        Ok(self.publish(&state.tasks))
    }

    async fn persist(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let key = self.config.storage_key.as_str();
        let encoded = encode_task_list(tasks).inspect_err(|error| {
            tracing::error!(key, %error, "failed to encode task list");
        })?;
        self.storage
            .set(key, &encoded)
            .await
            .inspect_err(|error| tracing::error!(key, %error, "failed to persist task list"))?;
        Ok(())
    }

    async fn read_persisted(&self) -> Vec<Task> {
        let key = self.config.storage_key.as_str();
        let raw = match self.storage.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::warn!(key, %error, "failed to read task list; starting empty");
                return Vec::new();
            }
        };

        match decode_task_list(&raw) {
            Ok(decoded) => {
                for skipped in &decoded.skipped {
                    tracing::warn!(key, ?skipped, "dropped stored task record");
                }
                decoded.tasks
            }
            Err(error) => {
                tracing::warn!(key, %error, "stored task list is unreadable; starting empty");
                Vec::new()
            }
        }
    }

    fn publish(&self, tasks: &[Task]) -> TaskSnapshot {
        let snapshot = TaskSnapshot::from(tasks);
        self.changes.send_replace(Arc::clone(&snapshot));
        snapshot
    }
}
