//! Game Configuration
//!
//! Settings read from the environment at startup. Command line flags
//! override them in the binary.

use thiserror::Error;

use crate::{DEFAULT_KEY_LEN, MAX_KEY_LEN, MIN_KEY_LEN};

/// Environment variable for the key length in bytes.
pub const ENV_KEY_BYTES: &str = "FAIR_RPS_KEY_BYTES";

/// Environment variable for the log filter (used when `RUST_LOG` is unset).
pub const ENV_LOG: &str = "FAIR_RPS_LOG";

/// Environment variable enabling the JSON reveal record.
pub const ENV_JSON: &str = "FAIR_RPS_JSON";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Value could not be parsed.
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
    },

    /// Key length outside the allowed range.
    #[error("key length must be between {min} and {max} bytes, got {got}")]
    KeyLength {
        /// Minimum.
        min: usize,
        /// Maximum.
        max: usize,
        /// Requested.
        got: usize,
    },
}

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// MAC key length in bytes.
    pub key_len: usize,
    /// `tracing` filter directive.
    pub log_filter: String,
    /// Print the reveal record as JSON after the result.
    pub json_receipt: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            key_len: DEFAULT_KEY_LEN,
            log_filter: "warn".to_string(),
            json_receipt: false,
        }
    }
}

impl GameConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create config from any variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();

        let key_len = match lookup(ENV_KEY_BYTES) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: ENV_KEY_BYTES,
                value: raw.clone(),
            })?,
            None => defaults.key_len,
        };

        let json_receipt = match lookup(ENV_JSON).as_deref().map(str::trim) {
            None | Some("") => defaults.json_receipt,
            Some("1") | Some("true") => true,
            Some("0") | Some("false") => false,
            Some(other) => {
                return Err(ConfigError::InvalidValue { name: ENV_JSON, value: other.to_string() })
            }
        };

        let config = Self {
            key_len,
            log_filter: lookup(ENV_LOG).unwrap_or(defaults.log_filter),
            json_receipt,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_KEY_LEN..=MAX_KEY_LEN).contains(&self.key_len) {
            return Err(ConfigError::KeyLength {
                min: MIN_KEY_LEN,
                max: MAX_KEY_LEN,
                got: self.key_len,
            });
        }
        Ok(())
    }
}
