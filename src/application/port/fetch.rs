// SPDX-License-Identifier: MPL-2.0
//! Document fetching port definition.
//!
//! This module defines the [`Fetcher`] trait used to GET a localization
//! document. Any HTTP status is a successful *fetch*; interpreting the status
//! is left to the caller. Only requests that produce no response at all fail.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

// =============================================================================
// FetchResponse
// =============================================================================

/// A complete response to a GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Reason phrase for `status` (may be empty).
    pub status_text: String,
    /// Response body decoded as text.
    pub body: String,
}

impl FetchResponse {
    /// Creates a `200 OK` response with the given body.
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            body: body.into(),
        }
    }

    /// Creates a response with an arbitrary status and empty body.
    #[must_use]
    pub fn with_status(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: String::new(),
        }
    }
}

// =============================================================================
// FetchError
// =============================================================================

/// A request that did not produce a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    /// Status code, when the transport got far enough to see one.
    pub status: Option<u16>,
    /// Human-readable description of the failure.
    pub message: String,
}

impl FetchError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{status} {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for FetchError {}

// =============================================================================
// Fetcher
// =============================================================================

/// Issues HTTP GET requests.
pub trait Fetcher: Send + Sync {
    /// Fetches `url` and returns the full response.
    fn get(&self, url: &str) -> impl Future<Output = Result<FetchResponse, FetchError>> + Send;
}

impl<F: Fetcher> Fetcher for Arc<F> {
    fn get(&self, url: &str) -> impl Future<Output = Result<FetchResponse, FetchError>> + Send {
        (**self).get(url)
    }
}
