// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Remote-call core for the storekeeper backend APIs
//!
//! This crate dispatches heterogeneous request shapes (platform gateway
//! dialects, site-scoped tunnel requests, externally hosted REST requests)
//! through a single authenticated transport, decodes raw payloads through
//! pluggable response mappers, and classifies backend failures according
//! to the API dialect that produced them.
//!
//! ## Design Principles
//!
//! The transport is an injected `Network` trait object, so nothing in this
//! crate requires a live connection to be exercised. All four delivery
//! forms (suspending, callback, result-callback, stream) funnel through
//! one internal dispatch pipeline; classification and mapping logic exists
//! exactly once. Timeout-classified failures additionally publish on an
//! injected event bus, observable independently of the per-call result
//! channel.

pub mod auth;
pub mod classify;
pub mod error;
pub mod events;
pub mod mapper;
pub mod network;
pub mod orders;
pub mod remote;
pub mod request;
pub mod settings;
pub mod sites;

pub use auth::*;
pub use classify::classify;
pub use error::*;
pub use events::*;
pub use mapper::*;
pub use network::*;
pub use remote::*;
pub use request::*;
pub use settings::*;
