//! Configuration for the task store.

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "tasks";

/// Task store configuration.
///
/// # Examples
///
/// ```
/// use progress_tracker::task::services::StoreConfig;
///
/// let config = StoreConfig::default();
/// assert_eq!(config.storage_key, "tasks");
/// assert!(config.require_text_on_edit);
///
/// let permissive = StoreConfig::permissive();
/// assert!(!permissive.require_text_on_edit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key under which the whole task list is stored.
    pub storage_key: String,
    /// Whether whole-task edits must keep a non-empty note, like creation.
    pub require_text_on_edit: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            require_text_on_edit: true,
        }
    }
}

impl StoreConfig {
    /// Creates a configuration whose edits may clear the note.
    ///
    /// Creation still requires a non-empty note.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            require_text_on_edit: false,
            ..Self::default()
        }
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }
}
