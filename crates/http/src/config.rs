//! Client configuration

use crate::client::DEFAULT_BASE_PATH;
use crate::client::token::TOKEN_KEY;
use serde::{Deserialize, Serialize};

/// API client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin the base path is resolved against
    pub origin: String,

    /// Path prefix for every relative request
    pub base_path: String,

    /// Session storage key holding the bearer token
    pub token_key: String,

    /// User agent override
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: "http://127.0.0.1:8080".to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            token_key: TOKEN_KEY.to_string(),
            user_agent: None,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ClientConfig {
    /// Load configuration from file, with `GOLDMANAGER_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("GOLDMANAGER"))
            .build()?
            .try_deserialize()
    }

    /// Load configuration with defaults and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables cannot be parsed
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        config::Config::builder()
            .set_default("origin", defaults.origin)?
            .set_default("base_path", defaults.base_path)?
            .set_default("token_key", defaults.token_key)?
            .add_source(config::Environment::with_prefix("GOLDMANAGER"))
            .build()?
            .try_deserialize()
    }
}
