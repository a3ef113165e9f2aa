// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Post URL to media resolution
//!
//! ## Architecture
//!
//! ```text
//! URL → validate → PageFetcher → HTML → ExtractionPipeline → MediaDescriptor
//!                                          ├─ SharedDataStrategy
//!                                          ├─ InlineMediaStrategy
//!                                          └─ MetaTagStrategy
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let resolver = MediaResolver::from_config(ResolverConfig::from_env())?;
//! let media = resolver.resolve("https://www.instagram.com/p/ABC123/").await?;
//! println!("{} -> {}", media.media_type.as_str(), media.download_url);
//! ```

pub mod config;
pub mod fetcher;
pub mod normalizer;
pub mod pipeline;
pub mod post_url;
pub mod service;
pub mod strategies;
pub mod strategy;
pub mod types;

pub use config::ResolverConfig;
pub use fetcher::{FetchError, PageFetcher, PageSource};
pub use normalizer::{normalize_media, NormalizeError};
pub use pipeline::ExtractionPipeline;
pub use post_url::{extract_shortcode, is_valid_instagram_url, normalize_url};
pub use service::MediaResolver;
pub use strategies::{InlineMediaStrategy, MetaTagStrategy, SharedDataStrategy};
pub use strategy::{ExtractionStrategy, StrategyOutcome};
pub use types::{MediaDescriptor, MediaType, ResolveError};
