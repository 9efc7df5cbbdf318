// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the interfaces the localization store depends on.
//! Infrastructure adapters implement them; tests substitute in-memory fakes.
//!
//! # Available Ports
//!
//! - [`clock`]: current time
//! - [`fetch`]: HTTP GET of a localization document
//! - [`storage`]: persistent string key/value storage
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so adapters can be shared across tasks
//! - [`Fetcher`] is the only asynchronous port; storage and clock calls
//!   never suspend

pub mod clock;
pub mod fetch;
pub mod storage;

// Re-export main types for convenience
pub use clock::Clock;
pub use fetch::{FetchError, FetchResponse, Fetcher};
pub use storage::{KeyValueStore, StorageError};
