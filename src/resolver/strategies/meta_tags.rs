// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Open Graph meta tag fallback

use scraper::{Html, Selector};
use tracing::debug;

use crate::resolver::strategy::{ExtractionStrategy, StrategyOutcome};
use crate::resolver::types::MediaDescriptor;

const OG_VIDEO: &str = "og:video";
const OG_IMAGE: &str = "og:image";

#[derive(Debug, Default, Clone, Copy)]
pub struct MetaTagStrategy;

impl MetaTagStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl ExtractionStrategy for MetaTagStrategy {
    fn extract(&self, html: &str) -> StrategyOutcome {
        let document = Html::parse_document(html);
        let video = meta_content(&document, OG_VIDEO);
        let image = meta_content(&document, OG_IMAGE);

        debug!(
            "Meta tags: og:video present={}, og:image present={}",
            video.is_some(),
            image.is_some()
        );

        match (video, image) {
            (Some(video), Some(image)) => StrategyOutcome::Found(MediaDescriptor::video(video, image)),
            (Some(video), None) => StrategyOutcome::Found(MediaDescriptor::video(video.clone(), video)),
            (None, Some(image)) => StrategyOutcome::Found(MediaDescriptor::image(image)),
            (None, None) => StrategyOutcome::NotApplicable,
        }
    }

    fn name(&self) -> &'static str {
        "meta_tags"
    }
}

/// Non-empty `content` of the first `<meta property="...">` tag
fn meta_content(document: &Html, property: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[property="{}"]"#, property)).ok()?;

    document
        .select(&selector)
        .filter_map(|el| el.value().attr("content"))
        .map(str::trim)
        .find(|content| !content.is_empty())
        .map(str::to_string)
}
