// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Media resolve API endpoint
//!
//! Provides the `/api/download` HTTP endpoint.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::resolve_handler;
pub use request::ResolveApiRequest;
pub use response::ResolveApiResponse;
