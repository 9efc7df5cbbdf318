// SPDX-License-Identifier: MPL-2.0
//! `reqwest` adapter implementing the [`Fetcher`] port.
//!
//! Relative URLs (`/locale/ja.json`) are resolved against an optional base
//! URL; without one they fail as transport errors.
//!
//! [`Fetcher`]: crate::application::port::Fetcher

use crate::application::port::{FetchError, FetchResponse, Fetcher};
use crate::config::HttpConfig;
use crate::error::{Error, Result};
use reqwest::Url;

/// Maximum number of redirects followed per request.
const MAX_REDIRECTS: usize = 10;

/// HTTP [`Fetcher`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: Option<Url>,
}

impl HttpFetcher {
    /// Builds a fetcher from the `[http]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `base_url` is not an absolute URL, or
    /// [`Error::Transport`] if the HTTP client cannot be initialized.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .map_err(|e| Error::Config(format!("invalid base_url: {e}")))?;

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| Error::Transport {
                status: None,
                status_text: e.to_string(),
            })?;

        Ok(Self { client, base_url })
    }

    fn resolve(&self, url: &str) -> std::result::Result<Url, FetchError> {
        // Joining an absolute URL onto a base yields the absolute URL unchanged
        let parsed = match &self.base_url {
            Some(base) => base.join(url),
            None => Url::parse(url),
        };
        parsed.map_err(|e| FetchError::new(format!("invalid url {url}: {e}")))
    }
}

impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> std::result::Result<FetchResponse, FetchError> {
        let target = self.resolve(url)?;
        tracing::debug!(url = %target, "fetching localization document");

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        Ok(FetchResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

fn transport_error(err: reqwest::Error) -> FetchError {
    FetchError {
        status: err.status().map(|s| s.as_u16()),
        message: err.to_string(),
    }
}
