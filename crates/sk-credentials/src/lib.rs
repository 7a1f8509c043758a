// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Credential types for the storekeeper remote layer
//!
//! Two authentication schemes exist: an OAuth bearer token issued by the
//! hosted platform, and a per-site application password for stores reached
//! directly over their own REST endpoint. The remote authenticator decides
//! which scheme applies from the request descriptor; this crate only
//! carries the values and validates their shape.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
