//! Logging infrastructure for Sluice components.
//!
//! This crate provides:
//! - Structured JSON (or pretty) logging via `tracing-subscriber`
//! - Configuration from code or `SLUICE_*` environment variables
//! - Standard lifecycle event names and `log_*!` macros
//!
//! # Usage
//!
//! ```ignore
//! use sluice_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env().with_log_level("debug");
//! init_logging(&config)?;
//! ```

pub mod config;
pub mod logging;

pub use config::{LogFormat, TelemetryConfig};
pub use logging::{events, init_logging};

use thiserror::Error;

/// Telemetry errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Failed to initialize logging.
    #[error("failed to initialize logging: {0}")]
    LoggingInit(String),
}
