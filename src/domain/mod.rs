// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value types and rules, no I/O.
//!
//! # Modules
//!
//! - [`dictionary`]: [`StringDictionary`](dictionary::StringDictionary) and JSON
//!   document parsing ([`DocumentError`](dictionary::DocumentError))
//! - [`freshness`]: [`ExpiryWindow`](freshness::ExpiryWindow),
//!   [`FreshnessPolicy`](freshness::FreshnessPolicy) and the stored timestamp format

pub mod dictionary;
pub mod freshness;

pub use dictionary::{DocumentError, StringDictionary};
pub use freshness::{ExpiryWindow, FreshnessPolicy};
