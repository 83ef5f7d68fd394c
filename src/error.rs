use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for typed-fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors raised outside the request/response cycle itself: configuration,
/// table construction and body reading.
///
/// Failures of a request are never reported through this type; they are the
/// `Err` side of [`crate::RequestResult`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Body already consumed")]
    BodyAlreadyConsumed,

    #[error("Status code {status} is mapped more than once")]
    DuplicateStatus { status: u16 },

    #[error("Invalid header '{name}'")]
    InvalidHeader { name: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl FetchError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new invalid header error
    pub fn invalid_header<S: Into<String>>(name: S) -> Self {
        Self::InvalidHeader { name: name.into() }
    }

    /// True when the error came from reading a body twice
    pub fn is_body_consumed(&self) -> bool {
        matches!(self, Self::BodyAlreadyConsumed)
    }
}
