// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Extraction pipeline tests over realistic page shapes

use instagram_media_resolver::resolver::{
    ExtractionPipeline, ExtractionStrategy, MediaDescriptor, MediaType, ResolveError,
    StrategyOutcome,
};

fn shared_data_script(media: &str) -> String {
    format!(
        r#"<script type="text/javascript">window._sharedData = {{"config":{{"viewer":null}},"entry_data":{{"PostPage":[{{"graphql":{{"shortcode_media":{}}}}}]}}}};</script>"#,
        media
    )
}

fn inline_script(media: &str) -> String {
    format!(
        r#"<script type="application/json">{{"require":[["ScheduledServerJS",{{"items":{{"shortcode_media":{},"viewer":{{"id":"1"}}}}}}]]}}</script>"#,
        media
    )
}

fn page(head: &str) -> String {
    format!("<!DOCTYPE html><html><head>{}</head><body></body></html>", head)
}

#[test]
fn test_legacy_state_wins_over_meta_tags() {
    let html = page(&format!(
        r#"<meta property="og:image" content="https://cdn.example.com/og.jpg">{}"#,
        shared_data_script(r#"{"is_video":false,"display_url":"https://cdn.example.com/full.jpg"}"#)
    ));

    let media = ExtractionPipeline::with_default_strategies()
        .extract(&html)
        .unwrap();

    assert_eq!(media, MediaDescriptor::image("https://cdn.example.com/full.jpg"));
}

#[test]
fn test_inline_object_used_when_legacy_state_absent() {
    let html = page(&inline_script(
        r#"{"is_video":true,"video_url":"https://cdn.example.com/reel.mp4","display_url":"https://cdn.example.com/reel.jpg"}"#,
    ));

    let media = ExtractionPipeline::with_default_strategies()
        .extract(&html)
        .unwrap();

    assert_eq!(media.media_type, MediaType::Video);
    assert_eq!(media.download_url, "https://cdn.example.com/reel.mp4");
    assert_eq!(media.thumbnail_url, "https://cdn.example.com/reel.jpg");
}

#[test]
fn test_broken_legacy_state_falls_through() {
    let html = page(
        r#"<script>window._sharedData = {"entry_data": { broken;</script><meta property="og:video" content="https://cdn.example.com/v.mp4"><meta property="og:image" content="https://cdn.example.com/v.jpg">"#,
    );

    let media = ExtractionPipeline::with_default_strategies()
        .extract(&html)
        .unwrap();

    assert_eq!(
        media,
        MediaDescriptor::video("https://cdn.example.com/v.mp4", "https://cdn.example.com/v.jpg")
    );
}

#[test]
fn test_carousel_uses_first_child_only() {
    let html = page(&shared_data_script(
        r#"{
            "is_video": false,
            "display_url": "https://cdn.example.com/cover.jpg",
            "edge_sidecar_to_children": {"edges": [
                {"node": {"is_video": false, "display_url": "https://cdn.example.com/first.jpg"}},
                {"node": {"is_video": true, "display_url": "https://cdn.example.com/second.jpg", "video_url": "https://cdn.example.com/second.mp4"}}
            ]}
        }"#,
    ));

    let media = ExtractionPipeline::with_default_strategies()
        .extract(&html)
        .unwrap();

    assert_eq!(media, MediaDescriptor::image("https://cdn.example.com/first.jpg"));
}

#[test]
fn test_login_wall_fails_extraction() {
    let html = page(r#"<meta property="og:title" content="Login • Instagram">"#);

    let result = ExtractionPipeline::with_default_strategies().extract(&html);

    assert_eq!(result, Err(ResolveError::ExtractionFailed));
}

#[test]
fn test_empty_pipeline_fails_extraction() {
    let result = ExtractionPipeline::new(Vec::new()).extract("<html></html>");
    assert_eq!(result, Err(ResolveError::ExtractionFailed));
}

struct FixedStrategy(&'static str);

impl ExtractionStrategy for FixedStrategy {
    fn extract(&self, _html: &str) -> StrategyOutcome {
        StrategyOutcome::Found(MediaDescriptor::image(self.0))
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

#[test]
fn test_custom_strategy_appended_last() {
    let pipeline = ExtractionPipeline::with_default_strategies()
        .with_strategy(Box::new(FixedStrategy("https://cdn.example.com/fallback.jpg")));

    assert_eq!(
        pipeline.strategy_names(),
        vec!["shared_data", "inline_media", "meta_tags", "fixed"]
    );

    let media = pipeline.extract("<html><body></body></html>").unwrap();
    assert_eq!(media.download_url, "https://cdn.example.com/fallback.jpg");
}
