// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod resolver;
pub mod version;

pub use resolver::{
    ExtractionPipeline, MediaDescriptor, MediaResolver, MediaType, ResolveError, ResolverConfig,
};
