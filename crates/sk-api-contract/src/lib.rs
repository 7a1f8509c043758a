//! storekeeper backend API contract types
//!
//! This crate defines the wire-visible vocabulary shared between the remote
//! core, its test doubles, and higher-level callers: the versioned API
//! dialect tiers, the HTTP methods requests are issued with, and the two
//! structured backend-error families together with their decoding rules.

pub mod error;
pub mod method;
pub mod version;

pub use error::*;
pub use method::*;
pub use version::*;
