// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for page fetching
//!
//! Defines the timeout, redirect bound and browser identity used for the
//! single outbound request made per resolution.

use std::env;

/// Desktop Chrome identity sent with every page request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the media resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Upper bound on the whole page request in milliseconds (default: 30000)
    pub timeout_ms: u64,
    /// Maximum redirects followed before giving up (default: 5)
    pub max_redirects: usize,
    /// User-Agent header value
    pub user_agent: String,
}

impl ResolverConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout_ms: env::var("FETCH_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_ms),
            max_redirects: env::var("FETCH_MAX_REDIRECTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_redirects),
            user_agent: env::var("FETCH_USER_AGENT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.user_agent),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_ms == 0 {
            return Err("timeout_ms must be at least 1".to_string());
        }
        if self.max_redirects > 20 {
            return Err("max_redirects cannot exceed 20".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            max_redirects: 5,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
