//! In-memory key-value storage.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::ports::{KeyValueStorage, StorageError, StorageResult};

/// Thread-safe in-memory key-value storage.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what a store wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let entries = HashMap::from([(key.into(), value.into())]);
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryKeyValueStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|err| StorageError::Unavailable(err.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| StorageError::Unavailable(err.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
