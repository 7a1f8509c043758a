// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Response mapper contract
//!
//! One mapper exists per endpoint and is supplied by the caller; the core
//! only promises to invoke it exactly once per successful response and to
//! propagate its failure untouched.

use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use thiserror::Error;

/// Errors produced while decoding a successful response payload
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected payload: {0}")]
    UnexpectedPayload(String),
}

/// Converts raw response bytes into a typed value
pub trait Mapper: Send + Sync {
    type Output;

    fn map(&self, response: &[u8]) -> Result<Self::Output, MappingError>;
}

/// Mapper that decodes the payload as JSON into `T`
pub struct JsonMapper<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonMapper<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonMapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Mapper for JsonMapper<T> {
    type Output = T;

    fn map(&self, response: &[u8]) -> Result<T, MappingError> {
        Ok(serde_json::from_slice(response)?)
    }
}

/// Mapper that hands the raw payload back untouched
pub struct IdentityMapper;

impl Mapper for IdentityMapper {
    type Output = Vec<u8>;

    fn map(&self, response: &[u8]) -> Result<Vec<u8>, MappingError> {
        Ok(response.to_vec())
    }
}
