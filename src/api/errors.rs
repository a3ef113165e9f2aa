// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::resolver::ResolveError;

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    InvalidRequest(String),
    NotFound(String),
    RateLimitExceeded(String),
    ServiceUnavailable(String),
    InternalError(String),
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            ApiError::InvalidRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::RateLimitExceeded(msg)
            | ApiError::ServiceUnavailable(msg)
            | ApiError::InternalError(msg) => msg.clone(),
        };

        ErrorResponse { error: message }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::RateLimitExceeded(_) => 429,
            ApiError::ServiceUnavailable(_) => 503,
            ApiError::InternalError(_) => 500,
        }
    }
}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::InvalidInput { .. } => ApiError::InvalidRequest(
                "Invalid Instagram URL. Please provide a link to a post, reel, TV video or story."
                    .to_string(),
            ),
            ResolveError::UpstreamNotFound { .. } => ApiError::NotFound(
                "Post not found. It may have been deleted or the link is incorrect.".to_string(),
            ),
            ResolveError::UpstreamThrottled { .. } => ApiError::RateLimitExceeded(
                "Instagram is limiting requests right now. Please try again later.".to_string(),
            ),
            ResolveError::UpstreamUnreachable { .. } => ApiError::ServiceUnavailable(
                "Unable to reach Instagram. Please check your connection and try again."
                    .to_string(),
            ),
            ResolveError::ExtractionFailed => ApiError::NotFound(
                "Could not find media in this post. It may be private or unavailable.".to_string(),
            ),
            ResolveError::Unknown { .. } => ApiError::InternalError(
                "Failed to process the request. Please try again.".to_string(),
            ),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::RateLimitExceeded(msg) => write!(f, "Rate limit exceeded: {}", msg),
            ApiError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.to_response())).into_response()
    }
}
