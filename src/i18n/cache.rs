// SPDX-License-Identifier: MPL-2.0
//! Persistent dictionary cache on top of a [`KeyValueStore`].
//!
//! Layout, with the default prefix:
//!
//! | Key | Value |
//! |---|---|
//! | `LocalizedStringsKey.date` | last network refresh, RFC 3339 |
//! | `LocalizedStringsKey.<lang>` | dictionary as a JSON object |
//!
//! Nothing here ever deletes a key. Stale entries are only ever overwritten.

use crate::application::port::{KeyValueStore, StorageError};
use crate::config::DATE_KEY_SUFFIX;
use crate::domain::freshness::{format_timestamp, parse_timestamp};
use crate::domain::StringDictionary;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Namespaced view of a [`KeyValueStore`] holding cached dictionaries.
#[derive(Clone)]
pub struct PersistentCache {
    store: Arc<dyn KeyValueStore>,
    prefix: String,
}

impl std::fmt::Debug for PersistentCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistentCache")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl PersistentCache {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Key of the global last-refresh timestamp.
    #[must_use]
    pub fn date_key(&self) -> String {
        format!("{}{}", self.prefix, DATE_KEY_SUFFIX)
    }

    /// Key of the cached dictionary for `lang`.
    #[must_use]
    pub fn entry_key(&self, lang: &str) -> String {
        format!("{}{}", self.prefix, lang)
    }

    /// Reads the last-refresh timestamp. Unparsable text reads as `None`.
    #[must_use]
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.store
            .get_item(&self.date_key())
            .and_then(|text| parse_timestamp(&text))
    }

    /// Reads the cached dictionary for `lang`.
    ///
    /// Returns `None` when the entry is missing, `null`, or not JSON.
    #[must_use]
    pub fn read_entry(&self, lang: &str) -> Option<StringDictionary> {
        let text = self.store.get_item(&self.entry_key(lang))?;
        match StringDictionary::parse_document(&text) {
            Ok(dictionary) => Some(dictionary),
            Err(err) => {
                tracing::debug!(lang, error = %err, "ignoring unusable cache entry");
                None
            }
        }
    }

    /// Writes the dictionary for `lang`.
    ///
    /// # Errors
    ///
    /// Returns the store's [`StorageError`] if the write fails.
    pub fn write_entry(&self, lang: &str, dictionary: &StringDictionary) -> Result<(), StorageError> {
        let json = dictionary
            .to_json()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        self.store.set_item(&self.entry_key(lang), &json)
    }

    /// Records `at` as the last network refresh.
    ///
    /// # Errors
    ///
    /// Returns the store's [`StorageError`] if the write fails.
    pub fn mark_refreshed(&self, at: DateTime<Utc>) -> Result<(), StorageError> {
        self.store.set_item(&self.date_key(), &format_timestamp(at))
    }
}
