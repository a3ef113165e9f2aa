// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Inline `shortcode_media` object extraction
//!
//! Newer pages drop the global and embed the media object somewhere inside a
//! larger JSON payload, sometimes under `xdt_shortcode_media`.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use tracing::{debug, warn};

use super::{inline_scripts, CandidateError};
use crate::resolver::normalizer::normalize_media;
use crate::resolver::strategy::{ExtractionStrategy, StrategyOutcome};
use crate::resolver::types::MediaDescriptor;

const MEDIA_KEY_MARKER: &str = "shortcode_media\"";

fn media_key_regex() -> &'static Regex {
    static MEDIA_KEY: OnceLock<Regex> = OnceLock::new();
    MEDIA_KEY.get_or_init(|| {
        Regex::new(r#""(?:xdt_)?shortcode_media"\s*:\s*"#).expect("media key pattern compiles")
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InlineMediaStrategy;

impl InlineMediaStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl ExtractionStrategy for InlineMediaStrategy {
    fn extract(&self, html: &str) -> StrategyOutcome {
        let scripts = inline_scripts(html)
            .into_iter()
            .filter(|script| script.text.contains(MEDIA_KEY_MARKER));

        for script in scripts {
            for key in media_key_regex().find_iter(&script.text) {
                match parse_media_object(&script.text[key.end()..]) {
                    Ok(descriptor) => {
                        debug!("Inline media object yielded {} media", descriptor.media_type.as_str());
                        return StrategyOutcome::Found(descriptor);
                    }
                    Err(e) => warn!("Skipping inline media object at offset {}: {}", key.start(), e),
                }
            }
        }

        StrategyOutcome::NotApplicable
    }

    fn name(&self) -> &'static str {
        "inline_media"
    }
}

/// Parse the object value that starts `rest`, ignoring whatever keys follow it
fn parse_media_object(rest: &str) -> Result<MediaDescriptor, CandidateError> {
    if !rest.starts_with('{') {
        return Err(CandidateError::MissingEntry("media object"));
    }

    let media = serde_json::Deserializer::from_str(rest)
        .into_iter::<Value>()
        .next()
        .ok_or(CandidateError::MissingEntry("media object"))??;

    Ok(normalize_media(&media)?)
}
