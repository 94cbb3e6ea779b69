//! Directory-backed key-value storage.
//!
//! Each key maps to `<key>.json` inside one directory opened through
//! `cap-std`, so reads and writes cannot escape it. Writes go to a hidden
//! temporary file first and are renamed into place, so a reader sees either
//! the old value or the new one.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use crate::task::ports::{KeyValueStorage, StorageError, StorageResult};

/// Key-value storage persisted as one file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileKeyValueStorage {
    dir: Arc<Dir>,
    root: Utf8PathBuf,
}

impl FileKeyValueStorage {
    /// Opens storage rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be created or
    /// opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> StorageResult<Self> {
        let root_path = root.as_ref();
        Dir::create_ambient_dir_all(root_path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(root_path, ambient_authority())?;
        Ok(Self {
            dir: Arc::new(dir),
            root: root_path.to_owned(),
        })
    }

    /// Returns the directory backing this storage.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Maps a key to its file name.
///
/// Keys are limited to ASCII alphanumerics, `-`, `_` and `.`, and must not
/// start with a dot; hidden names are reserved for temporary files.
fn file_name_for(key: &str) -> StorageResult<String> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.');
    if key.is_empty() || key.starts_with('.') || !key.chars().all(allowed) {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.json"))
}

async fn run_blocking<F, T>(f: F) -> StorageResult<T>
where
    F: FnOnce() -> StorageResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| StorageError::Unavailable(format!("task join error: {err}")))?
}

#[async_trait]
impl KeyValueStorage for FileKeyValueStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let file_name = file_name_for(key)?;
        let dir = Arc::clone(&self.dir);
        run_blocking(move || match dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::io(err)),
        })
        .await
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let file_name = file_name_for(key)?;
        let temp_name = format!(".{file_name}.tmp");
        let contents = value.to_owned();
        let dir = Arc::clone(&self.dir);
        run_blocking(move || {
            dir.write(&temp_name, contents)?;
            dir.rename(&temp_name, &dir, &file_name)?;
            Ok(())
        })
        .await
    }
}
