// SPDX-License-Identifier: MPL-2.0
//! Persistent key/value storage port.
//!
//! This module defines the [`KeyValueStore`] trait: a string-keyed store of
//! string values that outlives the process, in the manner of a browser's
//! local storage. Reads are infallible (a value that cannot be read is
//! absent); writes report failures.
//!
//! # Design Notes
//!
//! - Calls are synchronous and never suspend
//! - The trait is `Send + Sync` so one store can be shared behind an `Arc`
//!   by several `LocalizedStrings` instances

use std::fmt;
use std::sync::Arc;

// =============================================================================
// StorageError
// =============================================================================

/// Errors that can occur while writing to a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing medium rejected the write.
    Io(String),

    /// The store is not usable (no data directory, poisoned lock...).
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "Storage I/O error: {msg}"),
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

// =============================================================================
// KeyValueStore
// =============================================================================

/// String-keyed persistent storage.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if there is none.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the value could not be persisted.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}
