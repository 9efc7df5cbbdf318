// SPDX-License-Identifier: MPL-2.0
//! Directory-backed [`KeyValueStore`].
//!
//! Each key is one file whose name is the key with every byte outside
//! `[A-Za-z0-9_-]` (and a leading `.`) written as `%XX`. Writes go to a
//! uniquely named temporary file first and are renamed into place, so a
//! reader sees either the old value or the new one.
//!
//! # Path Resolution
//!
//! [`FileStore::open_default`] uses `<data dir>/storage`, see
//! [`paths::get_app_data_dir`].

use crate::application::port::{KeyValueStore, StorageError};
use crate::paths;
use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Subdirectory of the data directory that holds stored keys.
pub const STORAGE_DIR: &str = "storage";

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistent [`KeyValueStore`] keeping one file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Opens the store under the resolved data directory.
    ///
    /// Returns `None` if no data directory can be determined.
    #[must_use]
    pub fn open_default() -> Option<Self> {
        Self::open_with_override(None)
    }

    /// Opens the store under `<base_dir>/storage`, or under the resolved data
    /// directory when `base_dir` is `None`.
    #[must_use]
    pub fn open_with_override(base_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut dir| {
            dir.push(STORAGE_DIR);
            Self::new(dir)
        })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.dir.join(escape_key(key))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        let path = self.item_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read stored item");
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;

        let path = self.item_path(key);
        let temp_path = self.dir.join(format!(
            ".{}.{}.{}.tmp",
            escape_key(key),
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        if let Err(err) = fs::write(&temp_path, value) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        if let Err(err) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        Ok(())
    }
}

/// Maps a storage key to a file name.
fn escape_key(key: &str) -> String {
    if key.is_empty() {
        // "%" alone never comes out of the escaping below
        return "%".to_string();
    }

    let mut name = String::with_capacity(key.len());
    for (index, byte) in key.bytes().enumerate() {
        let keep = byte.is_ascii_alphanumeric()
            || byte == b'-'
            || byte == b'_'
            || (byte == b'.' && index > 0);
        if keep {
            name.push(char::from(byte));
        } else {
            let _ = write!(name, "%{byte:02X}");
        }
    }
    name
}
