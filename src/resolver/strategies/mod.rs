// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Built-in extraction strategies, in default priority order:
//!
//! 1. [`SharedDataStrategy`]: legacy `window._sharedData` global
//! 2. [`InlineMediaStrategy`]: `shortcode_media` object inside any script
//! 3. [`MetaTagStrategy`]: `og:video` / `og:image` meta tags

pub mod inline_media;
pub mod meta_tags;
pub mod shared_data;

pub use inline_media::InlineMediaStrategy;
pub use meta_tags::MetaTagStrategy;
pub use shared_data::SharedDataStrategy;

use scraper::{Html, Selector};
use thiserror::Error;

use super::normalizer::NormalizeError;

/// Why a candidate block was skipped. Never leaves a strategy.
#[derive(Debug, Error)]
pub(crate) enum CandidateError {
    #[error("assignment pattern not found")]
    PatternMismatch,

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing {0}")]
    MissingEntry(&'static str),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// An inline `<script>` block
#[derive(Debug, Clone)]
pub(crate) struct ScriptBlock {
    pub script_type: Option<String>,
    pub text: String,
}

impl ScriptBlock {
    /// Untyped or JavaScript-typed script
    pub fn is_javascript(&self) -> bool {
        match self.script_type.as_deref() {
            None => true,
            Some(t) => matches!(
                t.trim().to_ascii_lowercase().as_str(),
                "" | "text/javascript" | "application/javascript"
            ),
        }
    }
}

/// Collect inline (no `src`) script blocks in document order
pub(crate) fn inline_scripts(html: &str) -> Vec<ScriptBlock> {
    let document = Html::parse_document(html);
    let selector = match Selector::parse("script") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .filter(|el| el.value().attr("src").is_none())
        .map(|el| ScriptBlock {
            script_type: el.value().attr("type").map(str::to_string),
            text: el.text().collect::<String>(),
        })
        .filter(|block| !block.text.trim().is_empty())
        .collect()
}
