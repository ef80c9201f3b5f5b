//! HTTP client for fetching offer pages.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::source::PageRequest;

/// Configuration for the page client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from the request timeout).
    pub connect_timeout: Duration,
    /// Default user agent; overridden per request by the rotating identity
    /// header.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("skidka/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching a page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request failed at the connection level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// HTTP client with connection pooling.
#[derive(Debug, Clone)]
pub struct PageClient {
    client: Client,
    config: ClientConfig,
}

impl PageClient {
    /// Creates a new page client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            // Keep connections alive for reuse across a run's page fetches
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches a single page, returning its decoded JSON body.
    ///
    /// Returns `Ok(None)` on any non-success status: the terminal "no data"
    /// signal. The caller decides whether that ends the run. No retries are
    /// performed.
    ///
    /// # Errors
    ///
    /// [`FetchError::Http`] on a connection-level failure,
    /// [`FetchError::Decode`] when a 2xx body is not valid JSON, which is
    /// distinct from the clean end-of-data signal.
    pub async fn fetch_page(&self, request: &PageRequest) -> Result<Option<Value>, FetchError> {
        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.cookies.is_empty() {
            builder = builder.header(reqwest::header::COOKIE, request.cookie_header());
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }

        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => Err(FetchError::Decode(e.to_string())),
        }
    }
}
