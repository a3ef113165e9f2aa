// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Post URL validation and shortcode extraction
//!
//! Accepted shapes (host match is case-insensitive, `www.` optional):
//!
//! ```text
//! instagram.com/p/<id>
//! instagram.com/reel/<id>
//! instagram.com/tv/<id>
//! instagram.com/stories/<id>
//! ```

use regex::Regex;
use std::sync::OnceLock;

const DEFAULT_SCHEME: &str = "https://";

/// Post categories, in the order shortcode patterns are tried
pub const POST_CATEGORIES: [&str; 4] = ["p", "reel", "tv", "stories"];

fn accepted_url_regex() -> &'static Regex {
    static ACCEPTED: OnceLock<Regex> = OnceLock::new();
    ACCEPTED.get_or_init(|| {
        Regex::new(r"^(?i:https?://(?:www\.)?instagram\.com)/(?:p|reel|tv|stories)/[A-Za-z0-9_-]+(?:[/?#]|$)")
            .expect("accepted URL pattern compiles")
    })
}

fn shortcode_regexes() -> &'static [Regex] {
    static SHORTCODES: OnceLock<Vec<Regex>> = OnceLock::new();
    SHORTCODES.get_or_init(|| {
        POST_CATEGORIES
            .iter()
            .map(|category| {
                Regex::new(&format!(r"^(?i:https?://[^/?#]+)/{}/([A-Za-z0-9_-]+)(?:[/?#]|$)", category))
                    .expect("shortcode pattern compiles")
            })
            .collect()
    })
}

/// Trim the input and prepend `https://` when no scheme is given.
///
/// Returns `None` for empty or whitespace-only input.
pub fn normalize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("{}{}", DEFAULT_SCHEME, trimmed))
    }
}

/// Check whether the input is a post, reel, TV or story URL.
///
/// Never touches the network.
pub fn is_valid_instagram_url(input: &str) -> bool {
    match normalize_url(input) {
        Some(url) => accepted_url_regex().is_match(&url),
        None => false,
    }
}

/// First identifier segment matched by the category patterns, tried in
/// [`POST_CATEGORIES`] order.
///
/// Expects an absolute URL; the category must be the first path segment.
pub fn extract_shortcode(url: &str) -> Option<String> {
    shortcode_regexes()
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
