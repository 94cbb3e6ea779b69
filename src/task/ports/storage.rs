//! Key-value storage port used to persist the task list.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// String key-value storage contract.
///
/// The task store keeps its whole list under a single key and rewrites it in
/// full on every mutation, so implementations only need whole-value reads and
/// writes. A `set` must either replace the value completely or leave the
/// previous value in place.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be written.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Errors returned by storage implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The key cannot be used by this backend.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The backend is not usable (poisoned lock, closed handle).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Underlying I/O failure.
    #[error("storage I/O error: {0}")]
    Io(Arc<std::io::Error>),
}

impl StorageError {
    /// Wraps an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err)
    }
}
