//! Timeout-guarded fetching of raw WordPress content
//!
//! A [`ContentSource`] performs the actual GET; [`fetch_with_timeout`] races it
//! against a deadline and drops the in-flight request when the deadline wins.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while fetching raw content
#[derive(Debug, Error)]
pub enum FetchError {
    /// No response within the deadline
    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    /// HTTP request failed (DNS, connection, body read)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: StatusCode, url: String },

    /// Body was not valid JSON
    #[error("Failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Something that can GET a URL and hand back its JSON body
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// Content source backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSource {
    /// Create a new HttpSource with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a new HttpSource with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        // Read and parse separately: body read errors are Transport, bad JSON is Decode
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Fetches `url` from `source`, failing with [`FetchError::Timeout`] if no
/// response arrives within `timeout`
///
/// A single attempt is made. When the deadline fires the request future is
/// dropped, which cancels the underlying connection.
pub async fn fetch_with_timeout<S>(
    source: &S,
    url: &str,
    timeout: Duration,
) -> Result<Value, FetchError>
where
    S: ContentSource + ?Sized,
{
    match tokio::time::timeout(timeout, source.get_json(url)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout {
            url: url.to_string(),
            timeout,
        }),
    }
}
