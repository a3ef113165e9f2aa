// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Media resolver orchestration
//!
//! Validates the URL, fetches the post page once and runs the extraction
//! pipeline over it.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::config::ResolverConfig;
use super::fetcher::{FetchError, PageFetcher, PageSource};
use super::pipeline::ExtractionPipeline;
use super::post_url::{extract_shortcode, is_valid_instagram_url, normalize_url};
use super::types::{MediaDescriptor, ResolveError};

const INVALID_URL_REASON: &str = "not an Instagram post, reel, TV or story URL";

/// Resolves post URLs to direct media links
pub struct MediaResolver {
    source: Arc<dyn PageSource>,
    pipeline: ExtractionPipeline,
}

impl MediaResolver {
    /// Create a resolver over any page source
    pub fn new(source: Arc<dyn PageSource>, pipeline: ExtractionPipeline) -> Self {
        Self { source, pipeline }
    }

    /// Create a resolver that fetches over HTTP with the default strategies
    pub fn from_config(config: ResolverConfig) -> Result<Self, FetchError> {
        let fetcher = PageFetcher::new(config)?;
        Ok(Self::new(
            Arc::new(fetcher),
            ExtractionPipeline::with_default_strategies(),
        ))
    }

    /// Resolve a post URL
    ///
    /// # Errors
    /// - `InvalidInput` before any network access when the URL is not accepted
    /// - fetch failures categorized per [`ResolveError`]
    /// - `ExtractionFailed` when no strategy finds media
    pub async fn resolve(&self, raw_url: &str) -> Result<MediaDescriptor, ResolveError> {
        if !is_valid_instagram_url(raw_url) {
            debug!("Rejected URL: {:?}", raw_url);
            return Err(ResolveError::InvalidInput {
                reason: INVALID_URL_REASON.to_string(),
            });
        }

        let url = normalize_url(raw_url).ok_or_else(|| ResolveError::InvalidInput {
            reason: "URL is empty".to_string(),
        })?;

        match extract_shortcode(&url) {
            Some(shortcode) => info!("Resolving media for shortcode {} ({})", shortcode, url),
            None => debug!("No shortcode matched for: {}", url),
        }

        let start = Instant::now();

        let html = self.source.fetch_page(&url).await.map_err(|e| {
            warn!("Page fetch failed: {}", e);
            ResolveError::from(e)
        })?;

        let descriptor = self.pipeline.extract(&html)?;

        info!(
            "Resolved {} media for {} in {}ms",
            descriptor.media_type.as_str(),
            url,
            start.elapsed().as_millis()
        );

        Ok(descriptor)
    }

    /// Get the extraction pipeline
    pub fn pipeline(&self) -> &ExtractionPipeline {
        &self.pipeline
    }
}
