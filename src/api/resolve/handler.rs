// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Resolve API endpoint handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{debug, info, warn};

use super::request::ResolveApiRequest;
use super::response::ResolveApiResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /api/download - Resolve a post URL to its media
///
/// # Request
/// - `url`: Post, reel, TV or story URL (required)
///
/// # Response
/// - `downloadUrl`: Direct media URL
/// - `thumbnailUrl`: Preview image URL
/// - `type`: "image" or "video"
/// - `success`: true
///
/// # Errors
/// - 400 Bad Request: Missing body, missing or malformed URL
/// - 404 Not Found: Post not found, or no media could be extracted
/// - 429 Too Many Requests: Instagram rate limited the fetch
/// - 503 Service Unavailable: Instagram unreachable
/// - 500 Internal Server Error: Anything else
pub async fn resolve_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResolveApiRequest>, JsonRejection>,
) -> Result<Json<ResolveApiResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected resolve request body: {}", e);
        ApiError::InvalidRequest("Request body must be JSON with a \"url\" field".to_string())
    })?;

    let url = request.validate().map_err(|e| {
        debug!("Resolve validation failed: {}", e);
        ApiError::InvalidRequest(e)
    })?;

    let descriptor = state.resolver.resolve(url).await.map_err(|e| {
        warn!("Resolve failed for {}: {}", url, e);
        ApiError::from(e)
    })?;

    info!(
        "Resolve complete: {} media for {}",
        descriptor.media_type.as_str(),
        url
    );

    Ok(Json(ResolveApiResponse::from(descriptor)))
}

