// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Order endpoints on the site-scoped commerce namespace

use chrono::NaiveDateTime;
use serde::Deserialize;
use sk_api_contract::{HttpMethod, WooApiVersion};
use std::collections::BTreeMap;

use crate::error::RemoteResult;
use crate::mapper::JsonMapper;
use crate::remote::Remote;
use crate::request::JetpackRequest;

/// Number of orders fetched per page unless the caller asks otherwise
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Order document returned by the `wc/v3` namespace
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub id: i64,
    pub number: String,
    pub status: String,
    pub currency: String,
    pub total: String,
    pub date_created_gmt: Option<NaiveDateTime>,
}

/// Remote for order endpoints, tunneled through the platform gateway
#[derive(Clone)]
pub struct OrdersRemote {
    remote: Remote,
}

impl OrdersRemote {
    pub fn new(remote: Remote) -> Self {
        Self { remote }
    }

    /// Load one page of the store's orders, newest first
    pub async fn list_orders(&self, site_id: i64, page: u32) -> RemoteResult<Vec<Order>> {
        let parameters = BTreeMap::from([
            ("page".to_string(), page.to_string()),
            ("per_page".to_string(), DEFAULT_PAGE_SIZE.to_string()),
        ]);
        let request = JetpackRequest::new(WooApiVersion::Mark3, HttpMethod::Get, site_id, "orders")
            .with_parameters(parameters);

        self.remote
            .enqueue(request, &JsonMapper::<Vec<Order>>::new())
            .await
    }

    /// Load a single order by identifier
    pub async fn fetch_order(&self, site_id: i64, order_id: i64) -> RemoteResult<Order> {
        let request = JetpackRequest::new(
            WooApiVersion::Mark3,
            HttpMethod::Get,
            site_id,
            format!("orders/{}", order_id),
        );

        self.remote.enqueue(request, &JsonMapper::<Order>::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_an_order_document() {
        let payload = br#"{
            "id": 723,
            "number": "723",
            "status": "processing",
            "currency": "USD",
            "total": "31.20",
            "date_created_gmt": "2017-03-21T16:16:00"
        }"#;

        let order: Order = serde_json::from_slice(payload).unwrap();
        assert_eq!(order.id, 723);
        assert_eq!(order.status, "processing");
        assert!(order.date_created_gmt.is_some());
    }

    #[test]
    fn tolerates_missing_creation_date() {
        let payload = br#"{
            "id": 1,
            "number": "1",
            "status": "pending",
            "currency": "EUR",
            "total": "0.00"
        }"#;

        let order: Order = serde_json::from_slice(payload).unwrap();
        assert_eq!(order.date_created_gmt, None);
    }
}
