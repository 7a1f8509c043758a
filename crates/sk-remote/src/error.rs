// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error type surfaced by the remote-call pipeline

use sk_api_contract::{DotcomError, WordPressApiError};
use thiserror::Error;

use crate::mapper::MappingError;
use crate::network::TransportError;

/// Result type alias for remote operations
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Terminal failure of a single remote call
///
/// Every variant travels down the same per-call channel as a success
/// would; nothing is retried or swallowed inside the core.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Network-level failure, surfaced unchanged from the transport
    #[error("network error: {0}")]
    Network(#[from] TransportError),

    /// Structured backend error spoken by the older gateway dialects
    #[error("backend error: {0}")]
    Dotcom(#[from] DotcomError),

    /// Structured backend error spoken by the newer REST namespaces
    #[error("backend error: {0}")]
    WpApi(#[from] WordPressApiError),

    /// The response mapper rejected an otherwise successful payload
    #[error("mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// The descriptor could not be turned into a transport-level request
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("could not build request: {0}")]
    RequestBuild(String),
}

impl RemoteError {
    /// Whether this error carries the backend's request-timeout reason code
    pub fn is_timeout(&self) -> bool {
        matches!(self, RemoteError::Dotcom(error) if error.is_timeout())
    }
}
