// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Extraction pipeline
//!
//! Runs strategies in priority order over fetched HTML and returns the first
//! media found. Individual strategies cannot fail the pipeline; only running
//! out of strategies does.

use tracing::{debug, info, warn};

use super::strategies::{InlineMediaStrategy, MetaTagStrategy, SharedDataStrategy};
use super::strategy::{ExtractionStrategy, StrategyOutcome};
use super::types::{MediaDescriptor, ResolveError};

/// Ordered list of extraction strategies
pub struct ExtractionPipeline {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl ExtractionPipeline {
    /// Create a pipeline that tries `strategies` in the given order
    pub fn new(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    /// Shared data, then inline media object, then meta tags
    pub fn with_default_strategies() -> Self {
        Self::new(vec![
            Box::new(SharedDataStrategy::new()),
            Box::new(InlineMediaStrategy::new()),
            Box::new(MetaTagStrategy::new()),
        ])
    }

    /// Append a strategy with the lowest priority
    pub fn with_strategy(mut self, strategy: Box<dyn ExtractionStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Strategy names in the order they are tried
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Extract media from page HTML
    pub fn extract(&self, html: &str) -> Result<MediaDescriptor, ResolveError> {
        for strategy in &self.strategies {
            debug!("Trying extraction strategy: {}", strategy.name());

            match strategy.extract(html) {
                StrategyOutcome::Found(descriptor) => {
                    info!(
                        "Strategy {} found {} media",
                        strategy.name(),
                        descriptor.media_type.as_str()
                    );
                    return Ok(descriptor);
                }
                StrategyOutcome::NotApplicable => {
                    debug!("Strategy {} not applicable, trying next", strategy.name());
                }
            }
        }

        warn!(
            "No extraction strategy found media ({} tried)",
            self.strategies.len()
        );
        Err(ResolveError::ExtractionFailed)
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::with_default_strategies()
    }
}
