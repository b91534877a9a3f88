//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests, including:
//! - Building the HTTP client with the configured user agent and timeouts
//! - GET requests returning the raw response bytes
//! - Error classification into malformed URL, not found, and unreachable

use crate::config::HttpConfig;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Reasons a single fetch can fail
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL has no HTTP(S) scheme or does not parse
    #[error("malformed URL {url}: {reason}")]
    MalformedUrl { url: String, reason: String },

    /// The server answered with a non-success status
    #[error("page not found (HTTP {status_code})")]
    NotFound { status_code: u16 },

    /// DNS failure, refused connection, timeout, or a broken response body
    #[error("server unreachable: {0}")]
    Unreachable(String),
}

/// Raw response of a successful fetch
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Response body, undecoded
    pub body: Vec<u8>,
    /// Content-Type header value, if the server sent one
    pub content_type: Option<String>,
}

impl FetchError {
    /// Returns true for the malformed-URL case
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedUrl { .. })
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use download_all::config::HttpConfig;
/// use download_all::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the raw response body and its Content-Type
///
/// Decoding is left to the caller so the declared charset can be honored
/// and bytes that are invalid in it can be reported.
///
/// # Error Classification
///
/// | Condition | Error |
/// |-----------|-------|
/// | URL does not parse, or scheme is not http/https | `MalformedUrl` |
/// | HTTP status outside 2xx (after redirects) | `NotFound` |
/// | DNS failure, connection refused, timeout | `Unreachable` |
/// | Body could not be read | `Unreachable` |
///
/// No retries are attempted.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::MalformedUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(FetchError::MalformedUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(classify_request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::NotFound {
            status_code: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Unreachable(e.to_string()))?;

    tracing::debug!("Fetched {} bytes from {}", bytes.len(), url);

    Ok(FetchedPage {
        body: bytes.to_vec(),
        content_type,
    })
}

fn classify_request_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Unreachable("request timeout".to_string())
    } else if e.is_connect() {
        FetchError::Unreachable(format!("connection failed: {}", e))
    } else {
        FetchError::Unreachable(e.to_string())
    }
}
