//! Telemetry configuration.

use std::env;

/// Environment variable overriding the service name.
pub const ENV_SERVICE_NAME: &str = "SLUICE_SERVICE_NAME";
/// Environment variable overriding the log level filter.
pub const ENV_LOG_LEVEL: &str = "SLUICE_LOG_LEVEL";
/// Environment variable selecting the log format (`json` or `pretty`).
pub const ENV_LOG_FORMAT: &str = "SLUICE_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Structured JSON output (production).
    #[default]
    Json,
    /// Human-readable pretty output (development).
    Pretty,
}

impl LogFormat {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Telemetry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to log output (default: "sluice").
    pub service_name: String,

    /// Log level filter (default: "info").
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "sluice".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Json,
        }
    }
}

impl TelemetryConfig {
    /// Create a new telemetry config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from the `SLUICE_*` environment variables, falling
    /// back to defaults for unset or unparseable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup(ENV_SERVICE_NAME).filter(|v| !v.is_empty()) {
            config.service_name = name;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
            config.log_level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            match LogFormat::parse(&format) {
                Some(parsed) => config.log_format = parsed,
                None => {
                    tracing::warn!(value = %format, "unknown log format, keeping default")
                }
            }
        }

        config
    }

    /// Set the service name.
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = TelemetryConfig::from_lookup(lookup(&[]));
        assert_eq!(config, TelemetryConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = TelemetryConfig::from_lookup(lookup(&[
            (ENV_SERVICE_NAME, "orders-component"),
            (ENV_LOG_LEVEL, "debug"),
            (ENV_LOG_FORMAT, "Pretty"),
        ]));
        assert_eq!(config.service_name, "orders-component");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_from_lookup_ignores_bad_values() {
        let config = TelemetryConfig::from_lookup(lookup(&[
            (ENV_LOG_LEVEL, ""),
            (ENV_LOG_FORMAT, "xml"),
        ]));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
