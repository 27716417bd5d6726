//! # Configuration
//!
//! Protocol constants and dispatcher limits.
//!
//! The set of (identifier, factory) bindings is a compile-time constant table
//! (see [`crate::protocol::bootstrap`]) and is deliberately not configurable
//! here. What is configurable are resource limits the dispatcher enforces
//! before touching a frame.
//!
//! ## Configuration Sources
//! - TOML files via [`DispatchConfig::from_file`]
//! - Environment overrides via [`DispatchConfig::from_env`]
//! - Direct instantiation with defaults

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current supported protocol version.
pub const PROTOCOL_VERSION: u8 = 1;

/// Width in bytes of the leading packet identifier field of every frame.
pub const ID_WIDTH: usize = 1;

/// Max allowed payload size (16 MB). Validated before any factory runs, so a
/// hostile length claim never turns into an allocation.
pub const MAX_PAYLOAD_SIZE: usize = 16 * 1024 * 1024;

/// Limits the dispatcher enforces on inbound frames.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Maximum allowed payload size in bytes (frame length minus the id field).
    pub max_payload_size: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_payload_size: MAX_PAYLOAD_SIZE,
        }
    }
}

impl DispatchConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<Self>(content)?)
    }

    /// Load configuration from environment variables, starting from defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(size) = std::env::var("PACKET_REGISTRY_MAX_PAYLOAD_SIZE") {
            if let Ok(val) = size.parse::<usize>() {
                config.max_payload_size = val;
            }
        }

        config
    }

    /// Validate the configuration for common misconfigurations.
    ///
    /// Returns a list of validation errors. Empty list means the
    /// configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_payload_size == 0 {
            errors.push("Max payload size cannot be 0".to_string());
        } else if self.max_payload_size > 100 * 1024 * 1024 {
            errors.push(format!(
                "Max payload size too large: {} bytes (maximum recommended: 100 MB)",
                self.max_payload_size
            ));
        }

        errors
    }

    /// Validate and return a `Result` - convenience method.
    pub fn validate_strict(&self) -> Result<(), ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(DispatchConfig::default().validate().is_empty());
    }

    #[test]
    fn zero_payload_limit_is_rejected() {
        let config = DispatchConfig {
            max_payload_size: 0,
        };
        assert!(config.validate_strict().is_err());
    }

    #[test]
    fn config_parses_from_toml() {
        let config = DispatchConfig::from_toml("max_payload_size = 4096").unwrap();
        assert_eq!(config.max_payload_size, 4096);
    }
}
