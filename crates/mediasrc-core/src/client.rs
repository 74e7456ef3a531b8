//! HTTP client for static page fetches
//!
//! A thin wrapper around `reqwest` that performs exactly one GET per
//! call. Non-success statuses are logged and the body is returned anyway;
//! only transport failures surface as errors.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{MediaSrcError, Result};

/// Configuration for the HTTP client
///
/// Every field defaults to `None`, which leaves the `reqwest` default
/// in place.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// User-Agent header value
    pub user_agent: Option<String>,
}

/// HTTP client for fetching raw page HTML
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(user_agent) = config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build().map_err(MediaSrcError::HttpError)?;
        Ok(Self { client })
    }

    /// Fetch the body of `url` as text
    ///
    /// Redirects follow the client's default policy. The request is not
    /// retried.
    ///
    /// # Errors
    /// - `HttpError` - DNS, connection, timeout or body read failures
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(MediaSrcError::HttpError)?;

        let status = response.status();
        if status.is_success() {
            debug!(%url, %status, "Fetched page");
        } else {
            warn!(%url, %status, "Server returned non-success status; parsing body anyway");
        }

        response.text().await.map_err(MediaSrcError::HttpError)
    }
}
