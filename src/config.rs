//! # Configuration
//!
//! Client configuration and environment overrides.
//!
//! Configuration is resolved in the following order (later sources
//! override earlier):
//! 1. Default values
//! 2. Environment variables (prefixed with `PANTOS_`)
//! 3. Explicit builder-style setters
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `PANTOS_REQUEST_TIMEOUT_MS` | Per-call timeout for each network-bound adapter operation | `10000` |
//! | `PANTOS_VALID_UNTIL_BUFFER_SECS` | Buffer added to a transfer's validity deadline | `120` |
//!
//! # Examples
//!
//! ```
//! use pantos_client::config::ClientConfig;
//!
//! let config = ClientConfig::default().with_request_timeout_ms(2_000);
//! assert_eq!(config.request_timeout().as_millis(), 2_000);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default per-call timeout for network-bound adapter operations.
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Default buffer added to a transfer's "valid until" deadline, in seconds.
const DEFAULT_VALID_UNTIL_BUFFER_SECS: u64 = 120;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable holds an unparseable value.
    #[error("invalid value for {variable}: {message}")]
    InvalidValue {
        /// Variable name.
        variable: String,
        /// Error message.
        message: String,
    },
}

/// Client library configuration.
///
/// All fields have sensible defaults; hosts typically construct this once
/// and hand it to [`PantosClient::new`](crate::client::PantosClient::new).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Per-call timeout in milliseconds for each network-bound adapter
    /// operation. A node or chain exceeding it is treated as
    /// non-responsive, never as a fatal error for the whole operation.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Buffer in seconds added to the current time plus the chosen bid's
    /// execution time when computing a transfer's validity deadline.
    #[serde(default = "default_valid_until_buffer_secs")]
    pub valid_until_buffer_secs: u64,
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_valid_until_buffer_secs() -> u64 {
    DEFAULT_VALID_UNTIL_BUFFER_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            valid_until_buffer_secs: DEFAULT_VALID_UNTIL_BUFFER_SECS,
        }
    }
}

impl ClientConfig {
    /// Loads the configuration from the environment, falling back to
    /// defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a set variable cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = env_u64("PANTOS_REQUEST_TIMEOUT_MS")? {
            config.request_timeout_ms = value;
        }
        if let Some(value) = env_u64("PANTOS_VALID_UNTIL_BUFFER_SECS")? {
            config.valid_until_buffer_secs = value;
        }
        config.validate()?;
        Ok(config)
    }

    /// Sets the per-call request timeout.
    #[must_use]
    pub fn with_request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    /// Sets the "valid until" buffer.
    #[must_use]
    pub fn with_valid_until_buffer_secs(mut self, buffer_secs: u64) -> Self {
        self.valid_until_buffer_secs = buffer_secs;
        self
    }

    /// The per-call request timeout as a [`Duration`].
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero request timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                variable: "PANTOS_REQUEST_TIMEOUT_MS".to_string(),
                message: "timeout must be positive".to_string(),
            });
        }
        Ok(())
    }
}

fn env_u64(variable: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(variable) {
        Ok(raw) => raw
            .parse::<u64>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                variable: variable.to_string(),
                message: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = ClientConfig::default();
        assert_eq!(config.request_timeout_ms, 10_000);
        assert_eq!(config.valid_until_buffer_secs, 120);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_setters_override_defaults() {
        let config = ClientConfig::default()
            .with_request_timeout_ms(500)
            .with_valid_until_buffer_secs(30);
        assert_eq!(config.request_timeout(), Duration::from_millis(500));
        assert_eq!(config.valid_until_buffer_secs, 30);
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let config = ClientConfig::default().with_request_timeout_ms(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn serde_fills_missing_fields_with_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.request_timeout_ms, 10_000);
    }
}
