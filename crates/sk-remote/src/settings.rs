// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Network configuration types

use std::time::Duration;

/// Settings shared by the authenticator and the production transport
#[derive(Debug, Clone)]
pub struct NetworkSettings {
    /// Base URL of the hosted platform's API gateway
    pub dotcom_base_url: String,
    /// Value placed in the `User-Agent` header of every request
    pub user_agent: String,
    /// Per-request timeout applied by the production transport
    pub request_timeout: Duration,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            dotcom_base_url: "https://public-api.wordpress.com".to_string(),
            user_agent: "storekeeper/0.1".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}
