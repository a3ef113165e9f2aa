// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Media resolver orchestration tests

use async_trait::async_trait;
use instagram_media_resolver::resolver::{
    ExtractionPipeline, FetchError, MediaDescriptor, MediaResolver, PageSource, ResolveError,
};
use std::sync::{Arc, Mutex};

struct CannedSource {
    response: Result<String, FetchError>,
    requested: Mutex<Vec<String>>,
}

impl CannedSource {
    fn new(response: Result<String, FetchError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            requested: Mutex::new(Vec::new()),
        })
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for CannedSource {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.response.clone()
    }
}

fn resolver(source: Arc<CannedSource>) -> MediaResolver {
    MediaResolver::new(source, ExtractionPipeline::with_default_strategies())
}

const OG_IMAGE_PAGE: &str =
    r#"<html><head><meta property="og:image" content="https://cdn.example.com/p.jpg"></head></html>"#;

#[tokio::test]
async fn test_schemeless_url_is_fetched_over_https() {
    let source = CannedSource::new(Ok(OG_IMAGE_PAGE.to_string()));

    let media = resolver(source.clone())
        .resolve("  www.instagram.com/p/ABC123/  ")
        .await
        .unwrap();

    assert_eq!(media, MediaDescriptor::image("https://cdn.example.com/p.jpg"));
    assert_eq!(source.requested(), vec!["https://www.instagram.com/p/ABC123/"]);
}

#[tokio::test]
async fn test_rejected_urls_never_reach_the_source() {
    let source = CannedSource::new(Ok(OG_IMAGE_PAGE.to_string()));
    let resolver = resolver(source.clone());

    for input in [
        "",
        "   ",
        "https://example.com/p/ABC123/",
        "https://www.instagram.com/someuser/",
        "ftp://instagram.com/p/ABC123/",
    ] {
        let result = resolver.resolve(input).await;
        assert!(
            matches!(result, Err(ResolveError::InvalidInput { .. })),
            "expected InvalidInput for {:?}, got {:?}",
            input,
            result
        );
    }

    assert!(source.requested().is_empty());
}

#[tokio::test]
async fn test_fetch_errors_are_categorized() {
    let url = "https://www.instagram.com/reel/XYZ/";
    let cases = vec![
        (
            FetchError::HttpStatus {
                status: 404,
                url: url.to_string(),
            },
            ResolveError::UpstreamNotFound {
                url: url.to_string(),
            },
        ),
        (
            FetchError::HttpStatus {
                status: 429,
                url: url.to_string(),
            },
            ResolveError::UpstreamThrottled {
                url: url.to_string(),
            },
        ),
    ];

    for (fetch_error, expected) in cases {
        let source = CannedSource::new(Err(fetch_error));
        let result = resolver(source).resolve(url).await;
        assert_eq!(result, Err(expected));
    }

    let source = CannedSource::new(Err(FetchError::Connect {
        url: url.to_string(),
        message: "connection refused".to_string(),
    }));
    let result = resolver(source).resolve(url).await;
    assert!(matches!(result, Err(ResolveError::UpstreamUnreachable { .. })));
}

#[tokio::test]
async fn test_page_without_media() {
    let source = CannedSource::new(Ok("<html><body></body></html>".to_string()));

    let result = resolver(source.clone())
        .resolve("https://instagram.com/tv/B1b2C3/")
        .await;

    assert_eq!(result, Err(ResolveError::ExtractionFailed));
    assert_eq!(source.requested().len(), 1);
}
