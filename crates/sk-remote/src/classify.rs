// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Backend-error classification
//!
//! Classification is a pure function of the payload bytes and the
//! descriptor's dialect tier. A payload that does not decode into the
//! tier's configured family is not an error from this layer's point of
//! view; the caller must hand it to the response mapper as ordinary data.

use sk_api_contract::{DotcomError, ErrorDialect, WordPressApiError};

use crate::error::RemoteError;

/// Decide which structured error, if any, a raw payload represents.
///
/// Only the `Dotcom` and `WpApi` variants of [`RemoteError`] are ever
/// produced. Publishing the timeout side-channel notification is the
/// orchestrator's job, not this function's; classification has no side
/// effects.
pub fn classify(payload: &[u8], dialect: ErrorDialect) -> Option<RemoteError> {
    match dialect {
        ErrorDialect::Dotcom => DotcomError::from_payload(payload).map(RemoteError::Dotcom),
        ErrorDialect::WpApi => WordPressApiError::from_payload(payload).map(RemoteError::WpApi),
        ErrorDialect::None => None,
    }
}
