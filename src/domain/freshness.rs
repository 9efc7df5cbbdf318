// SPDX-License-Identifier: MPL-2.0
//! Cache freshness rules.
//!
//! One timestamp is recorded for the whole cache, whichever language was
//! fetched last. Refreshing one language therefore makes every cached
//! language look fresh.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Expiry Bounds
// =============================================================================

/// Expiry window bounds, in days.
pub mod expiry_bounds {
    /// Minimum expiry window.
    pub const MIN_DAYS: u32 = 0;
    /// Maximum expiry window.
    pub const MAX_DAYS: u32 = 365;
    /// Default expiry window.
    pub const DEFAULT_DAYS: u32 = 3;
}

// =============================================================================
// ExpiryWindow
// =============================================================================

/// How long cached dictionaries are trusted, clamped to 0–365 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryWindow(u32);

impl ExpiryWindow {
    /// Creates a window of `days`, clamping to the valid range.
    #[must_use]
    pub fn from_days(days: u32) -> Self {
        Self(days.clamp(expiry_bounds::MIN_DAYS, expiry_bounds::MAX_DAYS))
    }

    #[must_use]
    pub fn days(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::days(i64::from(self.0))
    }
}

impl Default for ExpiryWindow {
    fn default() -> Self {
        Self(expiry_bounds::DEFAULT_DAYS)
    }
}

// =============================================================================
// FreshnessPolicy
// =============================================================================

/// How the last-refresh timestamp is compared against the clock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FreshnessPolicy {
    /// `now + window > last_refresh`.
    ///
    /// Holds for any past timestamp, so once anything has been fetched the
    /// cache is served until an entry is missing.
    #[default]
    Compatible,
    /// `last_refresh + window > now`: cached data expires `window` after the
    /// last network fetch.
    Strict,
}

impl FreshnessPolicy {
    /// Returns whether the persisted cache may be served.
    ///
    /// A missing timestamp, or one at or before the Unix epoch, is never
    /// fresh.
    #[must_use]
    pub fn is_fresh(
        self,
        window: ExpiryWindow,
        last_refresh: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(last) = last_refresh else {
            return false;
        };
        if last.timestamp_millis() <= 0 {
            return false;
        }

        match self {
            FreshnessPolicy::Compatible => now + window.as_duration() > last,
            FreshnessPolicy::Strict => last + window.as_duration() > now,
        }
    }
}

// =============================================================================
// Timestamp text
// =============================================================================

/// Formats a refresh timestamp for storage (RFC 3339).
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339()
}

/// Parses a stored refresh timestamp.
///
/// Accepts RFC 3339 and RFC 2822. Anything else reads as "no timestamp".
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    DateTime::parse_from_rfc3339(text)
        .or_else(|_| DateTime::parse_from_rfc2822(text))
        .ok()
        .map(|at| at.with_timezone(&Utc))
}
