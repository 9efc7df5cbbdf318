// SPDX-License-Identifier: MPL-2.0
//! `localized_strings` loads per-language string dictionaries from JSON
//! documents over HTTP and keeps them in a time-bounded persistent cache.
//!
//! The entry point is [`i18n::LocalizedStrings`]: `load` a language once,
//! then look strings up synchronously with `string`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod paths;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
pub use i18n::LocalizedStrings;
