// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Cache**: Expiry window and storage key namespace
//! - **HTTP**: Client identification

use crate::domain::freshness::expiry_bounds;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Default number of days a cached dictionary is trusted.
pub const DEFAULT_EXPIRY_DAYS: u32 = expiry_bounds::DEFAULT_DAYS;

/// Minimum expiry window in days.
pub const MIN_EXPIRY_DAYS: u32 = expiry_bounds::MIN_DAYS;

/// Maximum expiry window in days.
pub const MAX_EXPIRY_DAYS: u32 = expiry_bounds::MAX_DAYS;

/// Namespace prepended to every storage key.
pub const DEFAULT_KEY_PREFIX: &str = "LocalizedStringsKey.";

/// Suffix of the storage key holding the last-refresh timestamp
/// (`"<prefix>date"`).
pub const DATE_KEY_SUFFIX: &str = "date";

// ==========================================================================
// HTTP Defaults
// ==========================================================================

/// `User-Agent` header sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("localized_strings/", env!("CARGO_PKG_VERSION"));
