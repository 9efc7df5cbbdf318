// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the ports: a scripted fetcher, a settable clock and a
//! store that refuses writes.

use crate::application::port::{
    Clock, FetchError, FetchResponse, Fetcher, KeyValueStore, StorageError,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Fixed instant used as "now" by default in tests.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
}

/// Fetcher answering from a URL → response table.
///
/// Unknown URLs answer `404 Not Found`. Every call yields to the scheduler
/// once before answering so concurrent loads interleave.
#[derive(Default)]
pub struct StubFetcher {
    responses: Mutex<HashMap<String, Result<FetchResponse, FetchError>>>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `url` with `200 OK` and `body`.
    pub fn with_body(self, url: &str, body: &str) -> Self {
        self.respond(url, Ok(FetchResponse::ok(body)));
        self
    }

    pub fn with_status(self, url: &str, status: u16, status_text: &str) -> Self {
        self.respond(url, Ok(FetchResponse::with_status(status, status_text)));
        self
    }

    pub fn with_error(self, url: &str, error: FetchError) -> Self {
        self.respond(url, Err(error));
        self
    }

    pub fn respond(&self, url: &str, response: Result<FetchResponse, FetchError>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Fetcher for StubFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Ok(FetchResponse::with_status(404, "Not Found")))
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(test_now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Store that reads nothing and fails every write.
#[derive(Default)]
pub struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }
}
