// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Transport abstraction and the production `reqwest` implementation

use async_trait::async_trait;
use sk_api_contract::HttpMethod;
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

use crate::settings::NetworkSettings;

/// A fully-formed, authenticated transport-level request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: BTreeMap<String, String>,
    /// Form-encoded body parameters; empty for body-less requests
    pub form: BTreeMap<String, String>,
}

/// Network-level failure reported by a transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("resource not found")]
    NotFound,

    #[error("request timed out")]
    Timeout,

    #[error("unacceptable status code: {0}")]
    UnacceptableStatusCode(u16),

    #[error("connection error: {0}")]
    Connection(String),
}

/// Sends transport-level requests and returns raw response bytes
///
/// The remote core treats the transport as an injected dependency; test
/// doubles substitute canned responses without touching the network.
#[async_trait]
pub trait Network: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<Vec<u8>, TransportError>;
}

/// Production transport backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpNetwork {
    client: reqwest::Client,
}

impl HttpNetwork {
    pub fn new(settings: &NetworkSettings) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(settings.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Network for HttpNetwork {
    async fn send(&self, request: TransportRequest) -> Result<Vec<u8>, TransportError> {
        let mut builder = self.client.request(reqwest_method(request.method), request.url.clone());

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }

        let response = builder.send().await.map_err(|error| {
            if error.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Connection(error.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| TransportError::Connection(error.to_string()))?;

        // A backend error *document* is a transport-level success; the
        // body flows upward for classification. Only an error status with
        // nothing to classify becomes a transport error.
        if body.is_empty() && !status.is_success() {
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(TransportError::NotFound);
            }
            return Err(TransportError::UnacceptableStatusCode(status.as_u16()));
        }

        tracing::debug!(
            status = status.as_u16(),
            bytes = body.len(),
            url = %request.url,
            "received response"
        );

        Ok(body.to_vec())
    }
}
