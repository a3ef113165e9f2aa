// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! CLI command tests that stay offline

use clap::Parser;
use instagram_media_resolver::cli::{
    commands::{extract_from_file, validation_report},
    execute, Cli, Commands,
};
use instagram_media_resolver::resolver::MediaType;
use std::fs;

#[test]
fn test_extract_saved_inline_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("post.html");
    fs::write(
        &path,
        r#"<html><script>{"data":{"xdt_shortcode_media":{"is_video":false,"display_url":"https://cdn.example.com/a.jpg"},"extensions":{}}}</script></html>"#,
    )
    .unwrap();

    let media = extract_from_file(&path).unwrap();

    assert_eq!(media.media_type, MediaType::Image);
    assert_eq!(media.download_url, "https://cdn.example.com/a.jpg");
}

#[test]
fn test_validation_report_serializes_camel_case() {
    let report = validation_report("https://www.instagram.com/tv/B1b2C3/");
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["valid"], true);
    assert_eq!(json["normalizedUrl"], "https://www.instagram.com/tv/B1b2C3/");
    assert_eq!(json["shortcode"], "B1b2C3");
}

#[tokio::test]
async fn test_execute_validate_succeeds_for_rejected_url() {
    let cli = Cli::try_parse_from(["instagram-media-cli", "validate", "https://example.com/"]).unwrap();
    assert!(matches!(cli.command, Commands::Validate(_)));

    // A rejected URL is reported, not treated as a command failure
    execute(cli).await.unwrap();
}

#[tokio::test]
async fn test_execute_extract_fails_without_media() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.html");
    fs::write(&path, "<html></html>").unwrap();

    let cli = Cli::try_parse_from([
        "instagram-media-cli".to_string(),
        "extract".to_string(),
        path.display().to_string(),
    ])
    .unwrap();

    assert!(execute(cli).await.is_err());
}
