// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Request descriptors
//!
//! A descriptor is an immutable value describing one outbound call. Three
//! shapes exist; all of them carry enough information to build exactly one
//! transport-level request and to derive the dialect tier used for error
//! classification. Classification behavior is switched on the closed
//! [`RemoteRequest`] enum, never on runtime type identity.

use sk_api_contract::{ApiVersion, ErrorDialect, HttpMethod, WooApiVersion};
use std::collections::BTreeMap;
use url::Url;

use crate::error::RemoteError;
use crate::network::TransportRequest;
use crate::settings::NetworkSettings;

/// Gateway dialect the site-scoped tunnel itself is addressed through
const TUNNEL_PREFIX: &str = "rest/v1.1";

/// Request against one of the platform gateway's versioned dialects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotcomRequest {
    pub api_version: ApiVersion,
    pub method: HttpMethod,
    pub path: String,
    pub parameters: BTreeMap<String, String>,
}

impl DotcomRequest {
    pub fn new(api_version: ApiVersion, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            api_version,
            method,
            path: path.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: BTreeMap<String, String>) -> Self {
        self.parameters = parameters;
        self
    }

    fn build(&self, settings: &NetworkSettings) -> Result<TransportRequest, RemoteError> {
        let address = format!(
            "{}/{}/{}",
            settings.dotcom_base_url.trim_end_matches('/'),
            self.api_version.path_prefix(),
            self.path.trim_start_matches('/'),
        );
        let mut url = Url::parse(&address)?;
        let mut form = BTreeMap::new();

        if self.method == HttpMethod::Get {
            append_query(&mut url, &self.parameters);
        } else {
            form = self.parameters.clone();
        }

        Ok(TransportRequest {
            method: self.method,
            url,
            headers: BTreeMap::new(),
            form,
        })
    }
}

/// Site-scoped request, routed through the platform's Jetpack tunnel
///
/// The commerce namespace path travels as the tunnel's `path` parameter;
/// the tunnel endpoint itself always lives on the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JetpackRequest {
    pub woo_api_version: WooApiVersion,
    pub method: HttpMethod,
    pub site_id: i64,
    pub path: String,
    pub parameters: BTreeMap<String, String>,
}

impl JetpackRequest {
    pub fn new(
        woo_api_version: WooApiVersion,
        method: HttpMethod,
        site_id: i64,
        path: impl Into<String>,
    ) -> Self {
        Self {
            woo_api_version,
            method,
            site_id,
            path: path.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: BTreeMap<String, String>) -> Self {
        self.parameters = parameters;
        self
    }

    /// The namespaced endpoint path as it appears inside the tunnel
    fn tunneled_path(&self) -> String {
        let prefix = self.woo_api_version.path_prefix();
        let path = self.path.trim_start_matches('/');
        let mut tunneled = if prefix.is_empty() {
            format!("/{}", path)
        } else {
            format!("/{}/{}", prefix, path)
        };

        if self.method == HttpMethod::Get && !self.parameters.is_empty() {
            let query: String = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.parameters)
                .finish();
            tunneled.push('?');
            tunneled.push_str(&query);
        }

        tunneled
    }

    fn build(&self, settings: &NetworkSettings) -> Result<TransportRequest, RemoteError> {
        let address = format!(
            "{}/{}/jetpack-blogs/{}/rest-api/",
            settings.dotcom_base_url.trim_end_matches('/'),
            TUNNEL_PREFIX,
            self.site_id,
        );
        let mut url = Url::parse(&address)?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("path", &self.tunneled_path());
            pairs.append_pair("json", "true");
            if self.method != HttpMethod::Get {
                pairs.append_pair("_method", &self.method.as_str().to_lowercase());
            }
        }

        let mut form = BTreeMap::new();
        if self.method != HttpMethod::Get && !self.parameters.is_empty() {
            let body = serde_json::to_string(&self.parameters)
                .map_err(|error| RemoteError::RequestBuild(error.to_string()))?;
            form.insert("body".to_string(), body);
        }

        // Mutations tunnel as POST; the intended method rides in `_method`.
        let method = if self.method == HttpMethod::Get {
            HttpMethod::Get
        } else {
            HttpMethod::Post
        };

        Ok(TransportRequest {
            method,
            url,
            headers: BTreeMap::new(),
            form,
        })
    }
}

/// Request addressed directly at an externally hosted site's REST endpoint
///
/// Not credentialed against the platform's dialect rules; backend error
/// payloads pass through to the mapper unclassified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestRequest {
    pub site_url: String,
    pub method: HttpMethod,
    pub path: String,
}

impl RestRequest {
    pub fn new(site_url: impl Into<String>, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            method,
            path: path.into(),
        }
    }

    fn build(&self) -> Result<TransportRequest, RemoteError> {
        let address = format!(
            "{}/{}",
            self.site_url.trim_end_matches('/'),
            self.path.trim_start_matches('/'),
        );
        let url = Url::parse(&address)?;

        Ok(TransportRequest {
            method: self.method,
            url,
            headers: BTreeMap::new(),
            form: BTreeMap::new(),
        })
    }
}

/// Closed set of request shapes accepted by the remote orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteRequest {
    Dotcom(DotcomRequest),
    Jetpack(JetpackRequest),
    Rest(RestRequest),
}

impl RemoteRequest {
    /// The HTTP method the caller asked for
    pub fn method(&self) -> HttpMethod {
        match self {
            RemoteRequest::Dotcom(request) => request.method,
            RemoteRequest::Jetpack(request) => request.method,
            RemoteRequest::Rest(request) => request.method,
        }
    }

    /// The endpoint path as the caller supplied it
    pub fn path(&self) -> &str {
        match self {
            RemoteRequest::Dotcom(request) => &request.path,
            RemoteRequest::Jetpack(request) => &request.path,
            RemoteRequest::Rest(request) => &request.path,
        }
    }

    /// Dispatch key for backend-error classification
    pub fn error_dialect(&self) -> ErrorDialect {
        match self {
            RemoteRequest::Dotcom(request) => request.api_version.error_dialect(),
            RemoteRequest::Jetpack(_) => ErrorDialect::Dotcom,
            RemoteRequest::Rest(_) => ErrorDialect::None,
        }
    }

    /// Turn the descriptor into an unauthenticated transport request
    pub(crate) fn build(&self, settings: &NetworkSettings) -> Result<TransportRequest, RemoteError> {
        match self {
            RemoteRequest::Dotcom(request) => request.build(settings),
            RemoteRequest::Jetpack(request) => request.build(settings),
            RemoteRequest::Rest(request) => request.build(),
        }
    }
}

impl From<DotcomRequest> for RemoteRequest {
    fn from(request: DotcomRequest) -> Self {
        RemoteRequest::Dotcom(request)
    }
}

impl From<JetpackRequest> for RemoteRequest {
    fn from(request: JetpackRequest) -> Self {
        RemoteRequest::Jetpack(request)
    }
}

impl From<RestRequest> for RemoteRequest {
    fn from(request: RestRequest) -> Self {
        RemoteRequest::Rest(request)
    }
}

fn append_query(url: &mut Url, parameters: &BTreeMap<String, String>) {
    if parameters.is_empty() {
        return;
    }
    let mut pairs = url.query_pairs_mut();
    for (name, value) in parameters {
        pairs.append_pair(name, value);
    }
}
