use crate::error::{FetchError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Default request timeout applied by the reqwest transport
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Client-wide settings for the reqwest transport
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Whether to follow redirects
    pub follow_redirects: Option<bool>,
    /// User-Agent sent with every request
    pub user_agent: Option<String>,
    /// Headers applied to all requests, overridden by per-request headers
    pub headers: Option<HashMap<String, String>>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: Some(DEFAULT_TIMEOUT_SECONDS),
            follow_redirects: Some(true),
            user_agent: None,
            headers: None,
        }
    }
}

impl ClientConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ClientConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(FetchError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;

        let config: ClientConfig = toml::from_str(&content).map_err(|e| {
            FetchError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_seconds == Some(0) {
            return Err(FetchError::invalid_config(
                "timeout_seconds must be greater than zero",
            ));
        }

        if let Some(headers) = &self.headers {
            if let Some(name) = headers.keys().find(|name| name.trim().is_empty()) {
                return Err(FetchError::invalid_header(name.clone()));
            }
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn follow_redirects(&self) -> bool {
        self.follow_redirects.unwrap_or(true)
    }
}
