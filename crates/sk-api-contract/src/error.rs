// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Structured backend-error families
//!
//! The platform backend speaks two disjoint error document shapes. The
//! older gateway dialects (and the site-scoped tunnel) answer with
//! `{"error": "<code>", "message": "<text>"}`; the newer REST namespaces
//! answer with `{"code": "<code>", "message": "<text>", "data": {...}}`.
//! Each decoder requires its family's discriminating keys, so a response
//! can never decode into both families.

use serde::Deserialize;
use thiserror::Error;

/// Error family spoken by the older gateway dialects and the site tunnel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DotcomError {
    #[error("authorization required")]
    Unauthorized,

    #[error("invalid authentication token")]
    InvalidToken,

    /// The gateway could not complete the upstream request. This is the
    /// reason code the backend uses for request timeouts.
    #[error("request failed")]
    RequestFailed,

    #[error("{code}: {message}")]
    Unknown { code: String, message: String },
}

#[derive(Deserialize)]
struct DotcomErrorDocument {
    error: String,
    message: String,
}

impl DotcomError {
    /// Decode a raw payload as a dotcom-family error document.
    ///
    /// Returns `None` when the payload is not shaped like one; callers
    /// treat that payload as ordinary response data.
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        let document: DotcomErrorDocument = serde_json::from_slice(payload).ok()?;
        Some(match document.error.as_str() {
            "unauthorized" => DotcomError::Unauthorized,
            "invalid_token" => DotcomError::InvalidToken,
            "http_request_failed" => DotcomError::RequestFailed,
            _ => DotcomError::Unknown {
                code: document.error,
                message: document.message,
            },
        })
    }

    /// Whether this error is the backend's request-timeout reason code
    pub fn is_timeout(&self) -> bool {
        matches!(self, DotcomError::RequestFailed)
    }
}

/// Error family spoken by the `wpcom/v2` and `wp/v2` REST namespaces
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordPressApiError {
    #[error("access forbidden")]
    Forbidden,

    #[error("{code}: {message}")]
    Unknown { code: String, message: String },
}

#[derive(Deserialize)]
struct WordPressApiErrorDocument {
    code: String,
    message: String,
}

impl WordPressApiError {
    /// Decode a raw payload as a WP-API-family error document.
    ///
    /// Returns `None` when the payload is not shaped like one.
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        let document: WordPressApiErrorDocument = serde_json::from_slice(payload).ok()?;
        Some(match document.code.as_str() {
            "rest_forbidden" => WordPressApiError::Forbidden,
            _ => WordPressApiError::Unknown {
                code: document.code,
                message: document.message,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT_DOCUMENT: &[u8] =
        br#"{"error": "http_request_failed", "message": "The request timed out."}"#;
    const FORBIDDEN_DOCUMENT: &[u8] =
        br#"{"code": "rest_forbidden", "message": "Sorry, you are not allowed to do that.", "data": {"status": 403}}"#;

    #[test]
    fn decodes_timeout_reason_code() {
        let error = DotcomError::from_payload(TIMEOUT_DOCUMENT).unwrap();
        assert_eq!(error, DotcomError::RequestFailed);
        assert!(error.is_timeout());
    }

    #[test]
    fn decodes_unknown_dotcom_codes_verbatim() {
        let payload = br#"{"error": "rest_invalid_param", "message": "Invalid parameter(s): id"}"#;
        let error = DotcomError::from_payload(payload).unwrap();
        assert_eq!(
            error,
            DotcomError::Unknown {
                code: "rest_invalid_param".to_string(),
                message: "Invalid parameter(s): id".to_string(),
            }
        );
        assert!(!error.is_timeout());
    }

    #[test]
    fn dotcom_decoder_rejects_wp_api_documents() {
        assert_eq!(DotcomError::from_payload(FORBIDDEN_DOCUMENT), None);
    }

    #[test]
    fn dotcom_decoder_rejects_ordinary_data_documents() {
        let payload = br#"{"id": 123, "status": "processing"}"#;
        assert_eq!(DotcomError::from_payload(payload), None);
        assert_eq!(DotcomError::from_payload(b""), None);
        assert_eq!(DotcomError::from_payload(b"not json"), None);
    }

    #[test]
    fn decodes_forbidden_reason_code() {
        let error = WordPressApiError::from_payload(FORBIDDEN_DOCUMENT).unwrap();
        assert_eq!(error, WordPressApiError::Forbidden);
    }

    #[test]
    fn wp_api_decoder_rejects_dotcom_documents() {
        assert_eq!(WordPressApiError::from_payload(TIMEOUT_DOCUMENT), None);
    }

    #[test]
    fn wp_api_decoder_rejects_ordinary_data_documents() {
        let payload = br#"{"id": 123, "status": "processing"}"#;
        assert_eq!(WordPressApiError::from_payload(payload), None);
        assert_eq!(WordPressApiError::from_payload(b""), None);
    }
}
