// SPDX-License-Identifier: MPL-2.0
//! String dictionaries and the rules for reading them from JSON documents.
//!
//! A document is accepted as long as it parses and is not the literal `null`.
//! Only the top-level object's scalar members become entries:
//!
//! - strings are kept as-is
//! - numbers and booleans keep their JSON text (`1`, `true`)
//! - `null`, arrays and nested objects are skipped, so lookups fall back
//!
//! A document that parses to a non-object value (`[]`, `"text"`, `42`) is
//! accepted as an empty dictionary.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Why a JSON document could not be turned into a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The document is the literal `null`.
    Null,
    /// The text is not JSON.
    Malformed(String),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Null => write!(f, "document is null"),
            DocumentError::Malformed(msg) => write!(f, "malformed JSON: {msg}"),
        }
    }
}

impl std::error::Error for DocumentError {}

/// Localized strings for one language, keyed by message key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringDictionary(HashMap<String, String>);

impl StringDictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Null`] for `null` and
    /// [`DocumentError::Malformed`] when the text is not JSON. An empty
    /// object is a valid, empty dictionary.
    pub fn parse_document(text: &str) -> Result<Self, DocumentError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DocumentError::Malformed(e.to_string()))?;
        Self::from_value(value)
    }

    /// Converts an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Null`] when `value` is `null`.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        match value {
            Value::Null => Err(DocumentError::Null),
            Value::Object(members) => Ok(Self(
                members
                    .into_iter()
                    .filter_map(|(key, value)| scalar_text(value).map(|text| (key, text)))
                    .collect(),
            )),
            _ => Ok(Self::default()),
        }
    }

    /// Serializes the dictionary as a JSON object.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization errors.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }

    /// Returns the localized string for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for StringDictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
