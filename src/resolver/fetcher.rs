// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Post page fetching
//!
//! One GET per resolution, presented as an ordinary browser navigation.
//! No retries: a failed attempt is reported to the caller as-is.

use async_trait::async_trait;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL,
    UPGRADE_INSECURE_REQUESTS,
};
use reqwest::Client;
use std::error::Error as StdError;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use super::config::ResolverConfig;

/// Page fetch error types
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Request did not finish within the configured bound
    #[error("Timeout fetching {url} after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    /// DNS lookup failed or the connection was refused
    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    /// HTTP non-success status
    #[error("HTTP {status} for: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Too many redirects for: {url}")]
    TooManyRedirects { url: String },

    /// Any other transport error
    #[error("HTTP error: {0}")]
    Request(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),
}

/// Source of raw post pages
///
/// The resolver only depends on this trait, so tests can serve canned HTML.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page at an absolute URL and return its body text
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP page fetcher backed by reqwest
pub struct PageFetcher {
    client: Client,
    config: ResolverConfig,
}

impl PageFetcher {
    /// Create a new page fetcher
    pub fn new(config: ResolverConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .default_headers(browser_headers())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    fn classify_error(&self, url: &str, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout_ms: self.config.timeout_ms,
            }
        } else if err.is_redirect() {
            FetchError::TooManyRedirects {
                url: url.to_string(),
            }
        } else if err.is_connect() {
            FetchError::Connect {
                url: url.to_string(),
                message: error_chain(&err),
            }
        } else {
            FetchError::Request(error_chain(&err))
        }
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

        debug!("Fetching page from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                    timeout_ms: self.config.timeout_ms,
                }
            } else {
                FetchError::Body(e.to_string())
            }
        })?;

        info!("Fetched {} bytes from: {}", html.len(), url);
        Ok(html)
    }
}

/// Headers a desktop browser sends on a top-level navigation
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("document"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("navigate"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("none"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-user"),
        HeaderValue::from_static("?1"),
    );
    headers
}

/// Flatten an error and its sources into one line, so DNS and refusal
/// details buried in the chain reach the log
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
