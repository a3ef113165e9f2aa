// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Context, Result};
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::resolver::{
    extract_shortcode, is_valid_instagram_url, normalize_url, ExtractionPipeline,
    MediaDescriptor, MediaResolver, ResolverConfig,
};

/// Arguments for resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Post, reel, TV or story URL
    pub url: String,

    /// Page request timeout in milliseconds
    #[arg(long, env = "FETCH_TIMEOUT_MS", default_value_t = 30_000)]
    pub timeout_ms: u64,

    /// Maximum redirects to follow
    #[arg(long, env = "FETCH_MAX_REDIRECTS", default_value_t = 5)]
    pub max_redirects: usize,
}

/// Arguments for extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Saved post page HTML
    pub file: PathBuf,
}

/// Arguments for validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// URL to check
    pub url: String,
}

/// Outcome of checking a URL without fetching it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub normalized_url: Option<String>,
    pub shortcode: Option<String>,
}

/// Fetch a post page and print its media as JSON
pub async fn resolve(args: ResolveArgs) -> Result<()> {
    let config = ResolverConfig {
        timeout_ms: args.timeout_ms,
        max_redirects: args.max_redirects,
        ..ResolverConfig::from_env()
    };
    config.validate().map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    let resolver = MediaResolver::from_config(config)?;
    let descriptor = resolver.resolve(&args.url).await?;

    print_json(&descriptor)
}

/// Run the extraction pipeline over a saved page and print its media as JSON
pub async fn extract(args: ExtractArgs) -> Result<()> {
    let descriptor = extract_from_file(&args.file)?;
    print_json(&descriptor)
}

/// Print whether a URL would be accepted, without fetching it
pub async fn validate(args: ValidateArgs) -> Result<()> {
    let report = validation_report(&args.url);
    if !report.valid {
        warn!("URL would be rejected: {}", args.url);
    }
    print_json(&report)
}

pub fn extract_from_file(path: &Path) -> Result<MediaDescriptor> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read HTML from {}", path.display()))?;
    info!("Loaded {} bytes from {}", html.len(), path.display());

    let descriptor = ExtractionPipeline::with_default_strategies().extract(&html)?;
    Ok(descriptor)
}

pub fn validation_report(url: &str) -> ValidationReport {
    let valid = is_valid_instagram_url(url);
    let normalized_url = normalize_url(url);
    let shortcode = if valid {
        normalized_url.as_deref().and_then(extract_shortcode)
    } else {
        None
    };

    ValidationReport {
        valid,
        normalized_url,
        shortcode,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
