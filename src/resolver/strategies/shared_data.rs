// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Legacy `window._sharedData` extraction
//!
//! Older post pages assign the whole page state to a global:
//!
//! ```text
//! window._sharedData = {"entry_data":{"PostPage":[{"graphql":{"shortcode_media":{...}}}]}};
//! ```

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use tracing::{debug, warn};

use super::{inline_scripts, CandidateError};
use crate::resolver::normalizer::normalize_media;
use crate::resolver::strategy::{ExtractionStrategy, StrategyOutcome};
use crate::resolver::types::MediaDescriptor;

const SHARED_DATA_MARKER: &str = "window._sharedData";

const POST_MEDIA_POINTER: &str = "/entry_data/PostPage/0/graphql/shortcode_media";

fn shared_data_regex() -> &'static Regex {
    static SHARED_DATA: OnceLock<Regex> = OnceLock::new();
    SHARED_DATA.get_or_init(|| {
        Regex::new(r"window\._sharedData\s*=\s*").expect("shared data pattern compiles")
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SharedDataStrategy;

impl SharedDataStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl ExtractionStrategy for SharedDataStrategy {
    fn extract(&self, html: &str) -> StrategyOutcome {
        let candidates = inline_scripts(html)
            .into_iter()
            .filter(|script| script.is_javascript() && script.text.contains(SHARED_DATA_MARKER));

        for (index, script) in candidates.enumerate() {
            match parse_shared_data(&script.text) {
                Ok(descriptor) => {
                    debug!("Shared data block {} yielded {} media", index, descriptor.media_type.as_str());
                    return StrategyOutcome::Found(descriptor);
                }
                Err(e) => warn!("Skipping shared data block {}: {}", index, e),
            }
        }

        StrategyOutcome::NotApplicable
    }

    fn name(&self) -> &'static str {
        "shared_data"
    }
}

fn parse_shared_data(script: &str) -> Result<MediaDescriptor, CandidateError> {
    let assignment = shared_data_regex()
        .find(script)
        .ok_or(CandidateError::PatternMismatch)?;

    // The object literal ends the statement; anything after it is another statement
    let rest = &script[assignment.end()..];
    if !rest.starts_with('{') {
        return Err(CandidateError::PatternMismatch);
    }

    let state = serde_json::Deserializer::from_str(rest)
        .into_iter::<Value>()
        .next()
        .ok_or(CandidateError::PatternMismatch)??;
    let media = state
        .pointer(POST_MEDIA_POINTER)
        .ok_or(CandidateError::MissingEntry("PostPage media"))?;

    Ok(normalize_media(media)?)
}
