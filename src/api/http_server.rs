// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    routing::{get, post},
    Router,
};
use std::{
    env,
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::signal;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use super::handlers::health_handler;
use super::resolve::resolve_handler;
use crate::resolver::MediaResolver;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Directory served at `/` (index.html and assets)
    pub public_dir: PathBuf,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            public_dir: PathBuf::from("public"),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<MediaResolver>,
}

impl AppState {
    pub fn new(resolver: Arc<MediaResolver>) -> Self {
        Self { resolver }
    }
}

/// Build the router: API routes, then static files for everything else
pub fn create_app(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/download", post(resolve_handler))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(config: ApiConfig, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state, &config.public_dir);

    let addr = config.listen_addr().parse::<SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API server listening on {}", addr);
    info!("Serving static files from {}", config.public_dir.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
