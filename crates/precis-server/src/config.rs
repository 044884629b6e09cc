//! Configuration file parsing for the summarization server.
//!
//! Loads settings from TOML files including bind address, the upstream
//! credential, and the request timeout. The credential may also come from
//! the environment; it is resolved once at startup and injected, never read
//! ad hoc during request handling.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable consulted when the config file carries no API key
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// Gemini API key; falls back to the environment when absent.
    /// A missing key is a request-time server error, never a startup crash.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Upstream request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Default upstream timeout: 30 seconds
fn default_request_timeout() -> u64 {
    30
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            api_key: None,
            request_timeout_secs: 30,
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    /// Resolve the upstream credential
    ///
    /// The config file value wins; otherwise the `GEMINI_API_KEY`
    /// environment variable is consulted. Empty values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .or_else(|| {
                std::env::var(API_KEY_ENV_VAR)
                    .ok()
                    .filter(|key| !key.is_empty())
            })
    }
}
