// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Versioned API dialect tiers
//!
//! Every request descriptor names the dialect tier it is issued against.
//! The tier is wire-visible as a path prefix and doubles as the dispatch
//! key for backend-error classification: each tier maps to exactly one
//! error family, or to none (opaque passthrough).

use serde::{Deserialize, Serialize};

/// Platform gateway API dialects, ordered oldest to newest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiVersion {
    Mark1,
    Mark1_1,
    Mark1_2,
    WpcomMark2,
    WpMark2,
}

impl ApiVersion {
    /// Path prefix placed between the gateway host and the endpoint path
    pub fn path_prefix(&self) -> &'static str {
        match self {
            ApiVersion::Mark1 => "rest/v1",
            ApiVersion::Mark1_1 => "rest/v1.1",
            ApiVersion::Mark1_2 => "rest/v1.2",
            ApiVersion::WpcomMark2 => "wpcom/v2",
            ApiVersion::WpMark2 => "wp/v2",
        }
    }

    /// The error family responses from this tier decode into
    pub fn error_dialect(&self) -> ErrorDialect {
        match self {
            ApiVersion::Mark1 | ApiVersion::Mark1_1 | ApiVersion::Mark1_2 => ErrorDialect::Dotcom,
            ApiVersion::WpcomMark2 | ApiVersion::WpMark2 => ErrorDialect::WpApi,
        }
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_prefix())
    }
}

/// Commerce plugin API namespaces, reached through the site-scoped tunnel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WooApiVersion {
    /// Plugin endpoints that live outside any versioned namespace
    None,
    Mark1,
    Mark2,
    Mark3,
}

impl WooApiVersion {
    /// Namespace prefix for the tunneled endpoint path
    pub fn path_prefix(&self) -> &'static str {
        match self {
            WooApiVersion::None => "",
            WooApiVersion::Mark1 => "wc/v1",
            WooApiVersion::Mark2 => "wc/v2",
            WooApiVersion::Mark3 => "wc/v3",
        }
    }
}

/// Classification key derived from a request descriptor
///
/// `None` means no family is configured for the request's tier: any
/// error-shaped payload passes through to the response mapper as ordinary
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDialect {
    Dotcom,
    WpApi,
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_version_path_prefixes_are_wire_stable() {
        assert_eq!(ApiVersion::Mark1.path_prefix(), "rest/v1");
        assert_eq!(ApiVersion::Mark1_1.path_prefix(), "rest/v1.1");
        assert_eq!(ApiVersion::Mark1_2.path_prefix(), "rest/v1.2");
        assert_eq!(ApiVersion::WpcomMark2.path_prefix(), "wpcom/v2");
        assert_eq!(ApiVersion::WpMark2.path_prefix(), "wp/v2");
    }

    #[test]
    fn v1_tiers_classify_with_the_dotcom_family() {
        assert_eq!(ApiVersion::Mark1.error_dialect(), ErrorDialect::Dotcom);
        assert_eq!(ApiVersion::Mark1_1.error_dialect(), ErrorDialect::Dotcom);
        assert_eq!(ApiVersion::Mark1_2.error_dialect(), ErrorDialect::Dotcom);
    }

    #[test]
    fn v2_tiers_classify_with_the_wp_api_family() {
        assert_eq!(ApiVersion::WpcomMark2.error_dialect(), ErrorDialect::WpApi);
        assert_eq!(ApiVersion::WpMark2.error_dialect(), ErrorDialect::WpApi);
    }

    #[test]
    fn woo_namespace_prefixes() {
        assert_eq!(WooApiVersion::None.path_prefix(), "");
        assert_eq!(WooApiVersion::Mark3.path_prefix(), "wc/v3");
    }
}
