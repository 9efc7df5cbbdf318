// SPDX-License-Identifier: MPL-2.0
//! System clock adapter implementing the [`Clock`] port.
//!
//! [`Clock`]: crate::application::port::Clock

use crate::application::port::Clock;
use chrono::{DateTime, Utc};

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
