// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Centralized logging utilities for storekeeper
//!
//! This crate provides standardized logging initialization so every
//! component (and every test binary) configures `tracing` the same way.

use serde::{Deserialize, Serialize};
use std::io;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// Re-export Level for convenience
pub use tracing::Level;

/// Output format for log messages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable plaintext format
    #[default]
    Plaintext,
    /// Structured JSON format
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plaintext" => Ok(LogFormat::Plaintext),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Invalid log format: {}. Use 'plaintext' or 'json'",
                s
            )),
        }
    }
}

/// Initialize logging with the specified component name, default level, and format
///
/// # Arguments
/// * `component` - The component name (e.g., "sk-remote")
/// * `default_level` - Default log level when RUST_LOG is not set
/// * `format` - Output format for log messages
pub fn init(component: &str, default_level: Level, format: LogFormat) -> anyhow::Result<()> {
    init_with_writer(component, default_level, format, io::stdout)
}

/// Initialize logging with a custom writer
pub fn init_with_writer<W>(
    component: &str,
    default_level: Level,
    format: LogFormat,
    writer: W,
) -> anyhow::Result<()>
where
    W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},{}={}", default_level, component, default_level))
    });

    match format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer().with_writer(writer).json();
            tracing_subscriber::registry().with(filter).with(layer).try_init()?;
        }
        LogFormat::Plaintext => {
            let layer = tracing_subscriber::fmt::layer().with_writer(writer);
            tracing_subscriber::registry().with(filter).with(layer).try_init()?;
        }
    }

    Ok(())
}

/// Redact sensitive information from log output
///
/// # Example
/// ```rust
/// use sk_logging::redact;
///
/// let auth_token = "oauth2-1234567890abcdef";
/// tracing::info!(auth_token = %redact(auth_token), "token configured");
/// // Output: auth_token="[REDACTED]"
/// ```
pub fn redact(_value: impl std::fmt::Display) -> &'static str {
    "[REDACTED]"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact() {
        let redacted = redact("sensitive-data");
        assert_eq!(format!("{}", redacted), "[REDACTED]");
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(
            "Plaintext".parse::<LogFormat>().unwrap(),
            LogFormat::Plaintext
        );
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
