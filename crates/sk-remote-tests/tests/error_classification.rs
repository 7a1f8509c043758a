// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Dialect-tier classification matrix
//!
//! Each gateway dialect decodes exactly one error family; a payload shaped
//! like the other family (or any ordinary data document) passes through to
//! the mapper as opaque data. External REST requests never classify.

use sk_api_contract::{ApiVersion, HttpMethod, WooApiVersion};
use sk_remote::{DotcomRequest, JetpackRequest, RemoteError, RestRequest};
use sk_remote_mock::fixture;
use sk_remote_tests::{RecordingMapper, test_remote};

fn dotcom_request(api_version: ApiVersion) -> DotcomRequest {
    DotcomRequest::new(api_version, HttpMethod::Get, "mock")
}

#[tokio::test]
async fn mark1_1_parses_dotcom_errors() {
    let (network, remote) = test_remote();
    network.simulate_response("mock", "timeout_error");

    let error = remote
        .enqueue(dotcom_request(ApiVersion::Mark1_1), &RecordingMapper::new())
        .await
        .unwrap_err();

    assert!(matches!(error, RemoteError::Dotcom(_)));
}

#[tokio::test]
async fn mark1_1_does_not_parse_wp_api_errors() {
    let (network, remote) = test_remote();
    network.simulate_response("mock", "error-wp-rest-forbidden");

    let mapper = RecordingMapper::new();
    let payload = remote
        .enqueue(dotcom_request(ApiVersion::Mark1_1), &mapper)
        .await
        .unwrap();

    // The mismatched error document is ordinary mapper input.
    assert_eq!(payload, fixture("error-wp-rest-forbidden"));
    assert!(mapper.input().is_some());
}

#[tokio::test]
async fn mark1_2_parses_dotcom_errors() {
    let (network, remote) = test_remote();
    network.simulate_response("mock", "timeout_error");

    let error = remote
        .enqueue(dotcom_request(ApiVersion::Mark1_2), &RecordingMapper::new())
        .await
        .unwrap_err();

    assert!(matches!(error, RemoteError::Dotcom(_)));
}

#[tokio::test]
async fn mark1_2_does_not_parse_wp_api_errors() {
    let (network, remote) = test_remote();
    network.simulate_response("mock", "error-wp-rest-forbidden");

    let result = remote
        .enqueue(dotcom_request(ApiVersion::Mark1_2), &RecordingMapper::new())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn wpcom_mark2_parses_wp_api_errors() {
    let (network, remote) = test_remote();
    network.simulate_response("mock", "error-wp-rest-forbidden");

    let error = remote
        .enqueue(dotcom_request(ApiVersion::WpcomMark2), &RecordingMapper::new())
        .await
        .unwrap_err();

    assert!(matches!(error, RemoteError::WpApi(_)));
}

#[tokio::test]
async fn wpcom_mark2_does_not_parse_dotcom_errors() {
    let (network, remote) = test_remote();
    network.simulate_response("mock", "timeout_error");
    let mut timeouts = remote.events().subscribe();

    let result = remote
        .enqueue(dotcom_request(ApiVersion::WpcomMark2), &RecordingMapper::new())
        .await;

    assert!(result.is_ok());
    // No classification happened, so no timeout notification either.
    assert!(timeouts.try_recv().is_err());
}

#[tokio::test]
async fn wp_mark2_parses_wp_api_errors() {
    let (network, remote) = test_remote();
    network.simulate_response("mock", "error-wp-rest-forbidden");

    let error = remote
        .enqueue(dotcom_request(ApiVersion::WpMark2), &RecordingMapper::new())
        .await
        .unwrap_err();

    assert!(matches!(error, RemoteError::WpApi(_)));
}

#[tokio::test]
async fn wp_mark2_does_not_parse_dotcom_errors() {
    let (network, remote) = test_remote();
    network.simulate_response("mock", "timeout_error");

    let result = remote
        .enqueue(dotcom_request(ApiVersion::WpMark2), &RecordingMapper::new())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn jetpack_requests_parse_dotcom_errors() {
    let (network, remote) = test_remote();
    network.simulate_response("mock", "timeout_error");

    let request = JetpackRequest::new(WooApiVersion::Mark3, HttpMethod::Post, 123, "mock");
    let error = remote
        .enqueue(request, &RecordingMapper::new())
        .await
        .unwrap_err();

    assert!(matches!(error, RemoteError::Dotcom(_)));
}

#[tokio::test]
async fn jetpack_requests_do_not_parse_wp_api_errors() {
    let (network, remote) = test_remote();
    network.simulate_response("mock", "error-wp-rest-forbidden");

    let request = JetpackRequest::new(WooApiVersion::Mark3, HttpMethod::Post, 123, "mock");
    let result = remote.enqueue(request, &RecordingMapper::new()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn external_rest_requests_do_not_parse_dotcom_errors() {
    let (network, remote) = test_remote();
    network.simulate_response("mock", "timeout_error");
    let mut timeouts = remote.events().subscribe();

    let request = RestRequest::new("https://example.com", HttpMethod::Get, "mock");
    let mapper = RecordingMapper::new();
    let result = remote.enqueue(request, &mapper).await;

    assert!(result.is_ok());
    assert_eq!(mapper.input().unwrap(), fixture("timeout_error"));
    assert!(timeouts.try_recv().is_err());
}

#[tokio::test]
async fn external_rest_requests_do_not_parse_wp_api_errors() {
    let (network, remote) = test_remote();
    network.simulate_response("mock", "error-wp-rest-forbidden");

    let request = RestRequest::new("https://example.com", HttpMethod::Get, "mock");
    let result = remote.enqueue(request, &RecordingMapper::new()).await;

    assert!(result.is_ok());
}
