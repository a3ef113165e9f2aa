// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Resolve API request types

use serde::{Deserialize, Serialize};

/// Request body for POST /api/download
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveApiRequest {
    /// Post, reel, TV or story URL
    #[serde(default)]
    pub url: Option<String>,
}

impl ResolveApiRequest {
    /// Validate the request and return the trimmed URL
    pub fn validate(&self) -> Result<&str, String> {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err("URL is required".to_string()),
        }
    }
}
