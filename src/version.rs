// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the Instagram media resolver

/// Semantic version number
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date
pub const BUILD_DATE: &str = "2026-10-18";

/// Supported post categories and extraction sources in this version
pub const FEATURES: &[&str] = &[
    "posts",
    "reels",
    "tv",
    "stories",
    "shared-data-extraction",
    "inline-media-extraction",
    "open-graph-fallback",
];

/// Get version info as formatted string
pub fn get_version_string() -> String {
    format!("v{} ({})", VERSION, BUILD_DATE)
}
