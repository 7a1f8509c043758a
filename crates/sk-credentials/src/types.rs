// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Core credential value types

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Credentials held by a signed-in session
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "lowercase")]
pub enum Credentials {
    /// OAuth bearer token issued by the hosted platform
    Wpcom { username: String, auth_token: String },

    /// Application password for a store reached over its own REST endpoint
    ApplicationPassword {
        username: String,
        password: String,
        /// Absolute address of the store, e.g. `https://shop.example.com`
        site_address: String,
    },
}

impl Credentials {
    /// The account name these credentials belong to
    pub fn username(&self) -> &str {
        match self {
            Credentials::Wpcom { username, .. } => username,
            Credentials::ApplicationPassword { username, .. } => username,
        }
    }

    /// Whether these credentials can authenticate platform gateway requests
    pub fn has_platform_token(&self) -> bool {
        matches!(self, Credentials::Wpcom { .. })
    }

    /// Check that no required field is empty and that a site address, when
    /// present, is absolute.
    pub fn validate(&self) -> Result<()> {
        match self {
            Credentials::Wpcom {
                username,
                auth_token,
            } => {
                if username.is_empty() {
                    return Err(Error::Validation("username must not be empty".into()));
                }
                if auth_token.is_empty() {
                    return Err(Error::Validation("auth token must not be empty".into()));
                }
            }
            Credentials::ApplicationPassword {
                username,
                password,
                site_address,
            } => {
                if username.is_empty() {
                    return Err(Error::Validation("username must not be empty".into()));
                }
                if password.is_empty() {
                    return Err(Error::Validation("password must not be empty".into()));
                }
                if !site_address.starts_with("http://") && !site_address.starts_with("https://") {
                    return Err(Error::InvalidSiteAddress(site_address.clone()));
                }
            }
        }
        Ok(())
    }
}

// Secrets must never reach log output, so Debug prints a placeholder
// instead of the token or password.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Wpcom { username, .. } => f
                .debug_struct("Wpcom")
                .field("username", username)
                .field("auth_token", &"[REDACTED]")
                .finish(),
            Credentials::ApplicationPassword {
                username,
                site_address,
                ..
            } => f
                .debug_struct("ApplicationPassword")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .field("site_address", site_address)
                .finish(),
        }
    }
}
