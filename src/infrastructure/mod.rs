// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`clock`]: [`SystemClock`] (implements [`Clock`])
//! - [`http`]: [`HttpFetcher`] over `reqwest` (implements [`Fetcher`])
//! - [`storage`]: [`MemoryStore`] and [`FileStore`] (implement [`KeyValueStore`])
//!
//! [`Clock`]: crate::application::port::Clock
//! [`Fetcher`]: crate::application::port::Fetcher
//! [`KeyValueStore`]: crate::application::port::KeyValueStore

pub mod clock;
pub mod http;
pub mod storage;

// Re-export main types for convenience
pub use clock::SystemClock;
pub use http::HttpFetcher;
pub use storage::{FileStore, MemoryStore};
