// SPDX-License-Identifier: MPL-2.0
//! [`KeyValueStore`] adapters.
//!
//! - [`MemoryStore`]: process-local map, for tests and ephemeral use
//! - [`FileStore`]: one file per key under a directory, survives restarts
//!
//! [`KeyValueStore`]: crate::application::port::KeyValueStore

mod file;
mod memory;

pub use file::{FileStore, STORAGE_DIR};
pub use memory::MemoryStore;
