// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for media resolution

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::fetcher::FetchError;

/// Kind of media a post resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

/// Direct media link resolved from a post page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDescriptor {
    /// Absolute URL of the media file itself
    pub download_url: String,
    /// Absolute URL of a preview image
    pub thumbnail_url: String,
    /// Image or video
    #[serde(rename = "type")]
    pub media_type: MediaType,
}

impl MediaDescriptor {
    /// Single image: the same URL serves as download and thumbnail
    pub fn image(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            download_url: url.clone(),
            thumbnail_url: url,
            media_type: MediaType::Image,
        }
    }

    pub fn video(download_url: impl Into<String>, thumbnail_url: impl Into<String>) -> Self {
        Self {
            download_url: download_url.into(),
            thumbnail_url: thumbnail_url.into(),
            media_type: MediaType::Video,
        }
    }
}

/// Errors that can occur while resolving a post URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Missing or malformed post URL
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// DNS failure, refused connection or timeout
    #[error("Upstream unreachable: {message}")]
    UpstreamUnreachable { message: String },

    /// The site answered 404
    #[error("Upstream returned not found for: {url}")]
    UpstreamNotFound { url: String },

    /// The site answered 429
    #[error("Upstream rate limited request for: {url}")]
    UpstreamThrottled { url: String },

    /// Page fetched, but no extraction strategy found media in it
    #[error("No extractable media found")]
    ExtractionFailed,

    #[error("Unexpected error: {message}")]
    Unknown { message: String },
}

impl From<FetchError> for ResolveError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Timeout { .. } | FetchError::Connect { .. } => {
                ResolveError::UpstreamUnreachable {
                    message: err.to_string(),
                }
            }
            FetchError::HttpStatus { status: 404, url } => ResolveError::UpstreamNotFound { url },
            FetchError::HttpStatus { status: 429, url } => ResolveError::UpstreamThrottled { url },
            FetchError::InvalidUrl(reason) => ResolveError::InvalidInput { reason },
            FetchError::HttpStatus { .. }
            | FetchError::TooManyRedirects { .. }
            | FetchError::Request(_)
            | FetchError::Body(_)
            | FetchError::ClientBuild(_) => ResolveError::Unknown {
                message: err.to_string(),
            },
        }
    }
}
