// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for credential handling

use thiserror::Error;

/// Result type alias for credential operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or validating credentials
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid site address: {0}")]
    InvalidSiteAddress(String),
}
