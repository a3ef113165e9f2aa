// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Media graph normalization
//!
//! Turns an embedded `shortcode_media` object into a [`MediaDescriptor`].
//! Carousels resolve to their first child only.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::types::{MediaDescriptor, MediaType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("Media graph is missing required field: {0}")]
    MissingField(&'static str),

    #[error("Media graph is malformed: {0}")]
    Malformed(String),
}

/// Fields shared by a post and each of its carousel children
#[derive(Debug, Deserialize)]
struct MediaNode {
    is_video: Option<bool>,
    display_url: Option<String>,
    video_url: Option<String>,
}

impl MediaNode {
    fn from_value(value: &Value) -> Result<Self, NormalizeError> {
        MediaNode::deserialize(value).map_err(|e| NormalizeError::Malformed(e.to_string()))
    }

    fn is_video(&self) -> bool {
        self.is_video.unwrap_or(false)
    }

    fn display_url(&self) -> Result<String, NormalizeError> {
        non_empty(&self.display_url).ok_or(NormalizeError::MissingField("display_url"))
    }

    fn video_url(&self) -> Result<String, NormalizeError> {
        non_empty(&self.video_url).ok_or(NormalizeError::MissingField("video_url"))
    }
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Normalize a parsed media graph
///
/// - video post: video URL for download, display URL for thumbnail
/// - carousel: first child's display URL for both, typed by that child
/// - otherwise: a single image
pub fn normalize_media(media: &Value) -> Result<MediaDescriptor, NormalizeError> {
    let node = MediaNode::from_value(media)?;

    if node.is_video() {
        return Ok(MediaDescriptor::video(node.video_url()?, node.display_url()?));
    }

    let first_child = media
        .pointer("/edge_sidecar_to_children/edges")
        .and_then(Value::as_array)
        .and_then(|edges| edges.first());

    if let Some(edge) = first_child {
        let child = edge
            .get("node")
            .ok_or(NormalizeError::MissingField("node"))?;
        let child = MediaNode::from_value(child)?;
        let display_url = child.display_url()?;
        let media_type = if child.is_video() {
            MediaType::Video
        } else {
            MediaType::Image
        };

        return Ok(MediaDescriptor {
            download_url: display_url.clone(),
            thumbnail_url: display_url,
            media_type,
        });
    }

    Ok(MediaDescriptor::image(node.display_url()?))
}
