//! Structured logging with JSON output.
//!
//! Logs go to stdout as flattened JSON in production and as pretty,
//! human-readable output during development.

use crate::{LogFormat, TelemetryConfig, TelemetryError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the logging subsystem.
///
/// Sets up tracing-subscriber with either JSON or pretty format,
/// respecting the configured log level. `RUST_LOG` takes precedence.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Json => init_json_logging(filter)?,
        LogFormat::Pretty => init_pretty_logging(filter)?,
    }

    tracing::debug!(
        service = %config.service_name,
        level = %config.log_level,
        "logging initialized"
    );
    Ok(())
}

/// Initialize JSON logging for production.
fn init_json_logging(filter: EnvFilter) -> Result<(), TelemetryError> {
    let json_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_file(false)
        .with_line_number(false)
        .flatten_event(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(json_layer)
        .try_init()
        .map_err(|e: tracing_subscriber::util::TryInitError| {
            TelemetryError::LoggingInit(e.to_string())
        })
}

/// Initialize pretty logging for development.
fn init_pretty_logging(filter: EnvFilter) -> Result<(), TelemetryError> {
    let pretty_layer = fmt::layer()
        .pretty()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(pretty_layer)
        .try_init()
        .map_err(|e: tracing_subscriber::util::TryInitError| {
            TelemetryError::LoggingInit(e.to_string())
        })
}

/// Standard log event names for the component lifecycle.
pub mod events {
    /// Component `startup` hook ran (flow activated).
    pub const COMPONENT_STARTUP: &str = "component_startup";

    /// Component `init` hook ran.
    pub const COMPONENT_INIT: &str = "component_init";

    /// Component `execute` ran for one message.
    pub const COMPONENT_EXECUTE: &str = "component_execute";

    /// Component `shutdown` hook ran (flow deactivated).
    pub const COMPONENT_SHUTDOWN: &str = "component_shutdown";

    /// A component emitted an event through its emitter.
    pub const EVENT_EMITTED: &str = "event_emitted";

    /// A credentials verifier rejected the configuration.
    pub const CREDENTIALS_REJECTED: &str = "credentials_rejected";
}

/// Helper macros for structured logging with standard fields.
///
/// These wrap the tracing macros to ensure consistent field naming.
#[macro_export]
macro_rules! log_component_startup {
    ($($field:tt)*) => {
        tracing::info!(
            event = $crate::logging::events::COMPONENT_STARTUP,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_component_init {
    ($($field:tt)*) => {
        tracing::info!(
            event = $crate::logging::events::COMPONENT_INIT,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_component_execute {
    ($($field:tt)*) => {
        tracing::info!(
            event = $crate::logging::events::COMPONENT_EXECUTE,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_component_shutdown {
    ($($field:tt)*) => {
        tracing::info!(
            event = $crate::logging::events::COMPONENT_SHUTDOWN,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_event_emitted {
    ($($field:tt)*) => {
        tracing::debug!(
            event = $crate::logging::events::EVENT_EMITTED,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_credentials_rejected {
    ($($field:tt)*) => {
        tracing::warn!(
            event = $crate::logging::events::CREDENTIALS_REJECTED,
            $($field)*
        )
    };
}
