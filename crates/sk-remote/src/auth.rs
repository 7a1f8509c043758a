// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Wraps request descriptors with credentials

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use sk_credentials::Credentials;

use crate::error::RemoteError;
use crate::network::TransportRequest;
use crate::request::RemoteRequest;
use crate::settings::NetworkSettings;

/// Produces sendable transport requests from descriptors and stored
/// credentials
///
/// Platform-bound requests (gateway dialects and the site tunnel) carry
/// the OAuth bearer token when one is held; requests addressed directly at
/// an external site carry HTTP Basic application-password credentials.
/// A platform request issued without a platform token is still built and
/// sent unauthenticated; the backend answers with a structured
/// `unauthorized` error that classifies like any other.
#[derive(Debug, Clone)]
pub struct Authenticator {
    credentials: Credentials,
    settings: NetworkSettings,
}

impl Authenticator {
    pub fn new(credentials: Credentials, settings: NetworkSettings) -> Self {
        Self {
            credentials,
            settings,
        }
    }

    pub fn settings(&self) -> &NetworkSettings {
        &self.settings
    }

    pub fn authenticate(&self, request: &RemoteRequest) -> Result<TransportRequest, RemoteError> {
        let mut transport = request.build(&self.settings)?;

        transport
            .headers
            .insert("User-Agent".to_string(), self.settings.user_agent.clone());
        transport
            .headers
            .insert("Accept".to_string(), "application/json".to_string());

        match request {
            RemoteRequest::Dotcom(_) | RemoteRequest::Jetpack(_) => {
                if let Credentials::Wpcom { auth_token, .. } = &self.credentials {
                    transport.headers.insert(
                        "Authorization".to_string(),
                        format!("Bearer {}", auth_token),
                    );
                }
            }
            RemoteRequest::Rest(_) => {
                if let Credentials::ApplicationPassword {
                    username, password, ..
                } = &self.credentials
                {
                    let encoded = BASE64.encode(format!("{}:{}", username, password));
                    transport
                        .headers
                        .insert("Authorization".to_string(), format!("Basic {}", encoded));
                }
            }
        }

        Ok(transport)
    }
}
