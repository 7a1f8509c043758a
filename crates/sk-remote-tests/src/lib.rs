// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Shared harnesses for remote-core integration tests

use sk_api_contract::{HttpMethod, WooApiVersion};
use sk_credentials::Credentials;
use sk_remote::{
    Authenticator, EventBus, JetpackRequest, Mapper, MappingError, NetworkSettings, Remote,
};
use sk_remote_mock::MockNetwork;
use std::sync::{Arc, Mutex};

/// Install the process-wide test logging subscriber.
///
/// Safe to call from every test; only the first call wins because the
/// global subscriber can be set once.
pub fn setup_test_logging() {
    let _ = sk_logging::init(
        "sk-remote-tests",
        sk_logging::Level::DEBUG,
        sk_logging::LogFormat::Plaintext,
    );
}

/// Build a remote over a fresh mock network, returning both
pub fn test_remote() -> (Arc<MockNetwork>, Remote) {
    setup_test_logging();

    let network = Arc::new(MockNetwork::new());
    let authenticator = Authenticator::new(
        Credentials::Wpcom {
            username: "merchant".to_string(),
            auth_token: "token".to_string(),
        },
        NetworkSettings::default(),
    );
    let remote = Remote::new(network.clone(), authenticator, EventBus::new());
    (network, remote)
}

/// Site-scoped sample request used throughout the suite
pub fn sample_request() -> JetpackRequest {
    JetpackRequest::new(WooApiVersion::Mark3, HttpMethod::Post, 123, "something")
}

/// Mapper that records the last payload it received, for asserting the
/// bytes that reach the mapping stage
#[derive(Clone, Default)]
pub struct RecordingMapper {
    input: Arc<Mutex<Option<Vec<u8>>>>,
}

impl RecordingMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// The payload most recently passed to `map`, if any
    pub fn input(&self) -> Option<Vec<u8>> {
        self.input.lock().unwrap().clone()
    }
}

impl Mapper for RecordingMapper {
    type Output = Vec<u8>;

    fn map(&self, response: &[u8]) -> Result<Vec<u8>, MappingError> {
        *self.input.lock().unwrap() = Some(response.to_vec());
        Ok(response.to_vec())
    }
}
