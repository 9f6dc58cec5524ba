//! Engine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of readings kept in history.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Default store key for reading history.
pub const DEFAULT_HISTORY_KEY: &str = "ph_reading_history";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for the reading service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum readings kept; oldest evicted first
    pub history_limit: usize,
    /// Store key the history is saved under
    pub history_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            history_key: DEFAULT_HISTORY_KEY.to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.history_limit == 0 {
            return Err(ConfigError::Invalid("history_limit must be at least 1".into()));
        }
        if self.history_key.trim().is_empty() {
            return Err(ConfigError::Invalid("history_key must not be empty".into()));
        }
        Ok(())
    }
}
