// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use instagram_media_resolver::{
    api::{start_server, ApiConfig, AppState},
    resolver::{MediaResolver, ResolverConfig},
    version,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Default to info when RUST_LOG is unset
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Instagram media resolver {}", version::get_version_string());

    let resolver_config = ResolverConfig::from_env();
    resolver_config.validate().map_err(anyhow::Error::msg)?;
    info!(
        "Page fetch: timeout {}ms, up to {} redirects",
        resolver_config.timeout_ms, resolver_config.max_redirects
    );

    let resolver = MediaResolver::from_config(resolver_config)?;
    info!(
        "Extraction strategies: {}",
        resolver.pipeline().strategy_names().join(" -> ")
    );

    let api_config = ApiConfig::from_env();
    info!("  Health:   GET  http://localhost:{}/health", api_config.port);
    info!("  Resolve:  POST http://localhost:{}/api/download", api_config.port);

    start_server(api_config, AppState::new(Arc::new(resolver))).await
}
