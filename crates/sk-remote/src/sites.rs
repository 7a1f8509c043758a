// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Site endpoints on the platform gateway

use serde::Deserialize;
use sk_api_contract::{ApiVersion, HttpMethod};
use std::collections::BTreeMap;

use crate::error::RemoteResult;
use crate::mapper::JsonMapper;
use crate::remote::Remote;
use crate::request::DotcomRequest;

/// Site document returned by the gateway's `sites/*` endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Site {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

/// Remote for store-site endpoints
#[derive(Clone)]
pub struct SiteRemote {
    remote: Remote,
}

impl SiteRemote {
    pub fn new(remote: Remote) -> Self {
        Self { remote }
    }

    /// Load a site the signed-in account can manage
    pub async fn fetch_site(&self, site_id: i64) -> RemoteResult<Site> {
        let parameters = BTreeMap::from([(
            "fields".to_string(),
            "ID,name,description,URL".to_string(),
        )]);
        let request = DotcomRequest::new(
            ApiVersion::Mark1_1,
            HttpMethod::Get,
            format!("sites/{}", site_id),
        )
        .with_parameters(parameters);

        self.remote.enqueue(request, &JsonMapper::<Site>::new()).await
    }

    /// Take a newly created store site out of its coming-soon state
    pub async fn launch_site(&self, site_id: i64) -> RemoteResult<Site> {
        let request = DotcomRequest::new(
            ApiVersion::Mark1_1,
            HttpMethod::Post,
            format!("sites/{}/launch", site_id),
        );

        self.remote.enqueue(request, &JsonMapper::<Site>::new()).await
    }
}
