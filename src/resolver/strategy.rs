// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Extraction strategy trait definition

use super::types::MediaDescriptor;

/// Result of running one strategy over a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyOutcome {
    /// The strategy located media
    Found(MediaDescriptor),
    /// Nothing usable for this strategy; the pipeline moves on
    NotApplicable,
}

impl StrategyOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, StrategyOutcome::Found(_))
    }

    pub fn into_descriptor(self) -> Option<MediaDescriptor> {
        match self {
            StrategyOutcome::Found(descriptor) => Some(descriptor),
            StrategyOutcome::NotApplicable => None,
        }
    }
}

impl From<Option<MediaDescriptor>> for StrategyOutcome {
    fn from(descriptor: Option<MediaDescriptor>) -> Self {
        match descriptor {
            Some(descriptor) => StrategyOutcome::Found(descriptor),
            None => StrategyOutcome::NotApplicable,
        }
    }
}

/// Trait for implementing extraction strategies
///
/// A strategy is a pure function over page HTML. It must not fail: parse
/// errors are logged inside the strategy and reported as
/// [`StrategyOutcome::NotApplicable`], so the next strategy gets its turn.
pub trait ExtractionStrategy: Send + Sync {
    /// Look for media in the page
    fn extract(&self, html: &str) -> StrategyOutcome;

    /// Get the strategy name for logging
    fn name(&self) -> &'static str;
}
