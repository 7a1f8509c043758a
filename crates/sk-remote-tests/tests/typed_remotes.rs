// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Consumer-side tests for the typed remotes built on the core

use sk_api_contract::HttpMethod;
use sk_remote::orders::OrdersRemote;
use sk_remote::sites::SiteRemote;
use sk_remote_tests::test_remote;

#[tokio::test]
async fn fetch_site_hits_the_versioned_gateway_endpoint() {
    let (network, remote) = test_remote();
    network.simulate_response("sites/1234", "site");

    let site = SiteRemote::new(remote).fetch_site(1234).await.unwrap();

    assert_eq!(site.id, 1234);
    assert_eq!(site.name, "My Test Store");

    let requests = network.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert!(requests[0].url.path().ends_with("/rest/v1.1/sites/1234"));
}

#[tokio::test]
async fn launch_site_posts_to_the_launch_endpoint() {
    let (network, remote) = test_remote();
    network.simulate_response("launch", "site");

    let site = SiteRemote::new(remote).launch_site(1234).await.unwrap();

    assert_eq!(site.id, 1234);

    let requests = network.requests();
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert!(requests[0].url.path().ends_with("/sites/1234/launch"));
}

#[tokio::test]
async fn list_orders_tunnels_through_the_site_gateway() {
    let (network, remote) = test_remote();
    network.simulate_response("orders", "orders-list");

    let orders = OrdersRemote::new(remote).list_orders(1234, 1).await.unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, 723);
    assert_eq!(orders[1].status, "completed");

    let requests = network.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert!(requests[0]
        .url
        .path()
        .contains("jetpack-blogs/1234/rest-api"));
}

#[tokio::test]
async fn fetch_order_loads_a_single_document() {
    let (network, remote) = test_remote();
    network.simulate_response("723", "order");

    let order = OrdersRemote::new(remote).fetch_order(1234, 723).await.unwrap();

    assert_eq!(order.id, 723);
    assert_eq!(order.total, "31.20");
    assert!(order.date_created_gmt.is_some());
}
