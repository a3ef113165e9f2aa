// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Resolve API response types

use serde::{Deserialize, Serialize};

use crate::resolver::{MediaDescriptor, MediaType};

/// Response body for POST /api/download
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveApiResponse {
    /// Direct media URL
    pub download_url: String,

    /// Preview image URL
    pub thumbnail_url: String,

    /// "image" or "video"
    #[serde(rename = "type")]
    pub media_type: MediaType,

    /// Always true; failures use the error body instead
    pub success: bool,
}

impl From<MediaDescriptor> for ResolveApiResponse {
    fn from(descriptor: MediaDescriptor) -> Self {
        Self {
            download_url: descriptor.download_url,
            thumbnail_url: descriptor.thumbnail_url,
            media_type: descriptor.media_type,
            success: true,
        }
    }
}
