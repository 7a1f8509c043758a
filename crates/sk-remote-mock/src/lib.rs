// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Mock network implementing the `Network` trait for testing
//!
//! This crate provides a transport double that records every request and
//! answers with canned fixture payloads keyed by URL suffix, so remote
//! tests exercise the full dispatch/classify/map pipeline without any
//! real connectivity. Unmatched requests resolve to
//! `TransportError::NotFound`, mirroring a freshly armed double with no
//! simulation configured.

use async_trait::async_trait;
use sk_remote::{Network, TransportError, TransportRequest};
use std::path::Path;
use std::sync::Mutex;

/// Load a named fixture payload from this crate's `fixtures/` directory.
///
/// Panics when the fixture is missing; a typo in a test should fail
/// loudly, not produce a confusing empty payload.
pub fn fixture(name: &str) -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(format!("{}.json", name));
    std::fs::read(&path)
        .unwrap_or_else(|error| panic!("missing fixture {}: {}", path.display(), error))
}

type CannedResponse = Result<Vec<u8>, TransportError>;

/// Transport double with canned responses keyed by URL suffix
#[derive(Default)]
pub struct MockNetwork {
    responses: Mutex<Vec<(String, CannedResponse)>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a fixture payload for any request whose full URL (including
    /// query) contains `url_suffix`.
    pub fn simulate_response(&self, url_suffix: impl Into<String>, fixture_name: &str) {
        self.responses
            .lock()
            .unwrap()
            .push((url_suffix.into(), Ok(fixture(fixture_name))));
    }

    /// Arm a transport error for any request whose full URL contains
    /// `url_suffix`.
    pub fn simulate_error(&self, url_suffix: impl Into<String>, error: TransportError) {
        self.responses.lock().unwrap().push((url_suffix.into(), Err(error)));
    }

    /// Every transport request received so far, in arrival order.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Network for MockNetwork {
    async fn send(&self, request: TransportRequest) -> Result<Vec<u8>, TransportError> {
        self.requests.lock().unwrap().push(request.clone());

        let url = request.url.to_string();
        let responses = self.responses.lock().unwrap();
        for (suffix, response) in responses.iter() {
            if url.contains(suffix.as_str()) {
                return response.clone();
            }
        }

        Err(TransportError::NotFound)
    }
}
