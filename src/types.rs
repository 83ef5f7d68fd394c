use crate::error::Result;
use crate::http_error::NetworkError;
use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use std::collections::HashMap;
use std::error::Error as StdError;
use std::time::Duration;
use thiserror::Error;

/// Boxed error accepted from transports
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Per-request settings handed to the transport untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// HTTP method, GET unless set
    pub method: Method,
    /// Request headers keyed by lower-cased name, overriding client-wide
    /// defaults
    pub headers: HashMap<String, String>,
    /// Request body
    pub body: Option<Bytes>,
    /// Timeout for this request, overriding the client timeout
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get() -> Self {
        Self::new().method(Method::GET)
    }

    pub fn post() -> Self {
        Self::new().method(Method::POST)
    }

    pub fn put() -> Self {
        Self::new().method(Method::PUT)
    }

    pub fn patch() -> Self {
        Self::new().method(Method::PATCH)
    }

    pub fn delete() -> Self {
        Self::new().method(Method::DELETE)
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set a header; names are case-insensitive and the last value set wins
    pub fn header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.insert(normalize_name(name.into()), value.into());
        self
    }

    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers
            .extend(headers.into_iter().map(|(name, value)| (normalize_name(name), value)));
        self
    }

    /// Set an `Authorization: Bearer <token>` header
    pub fn bearer_auth<T: AsRef<str>>(self, token: T) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.header(AUTHORIZATION.as_str(), value)
    }

    pub fn body<B: Into<Bytes>>(mut self, body: B) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON body and set the content type
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value)?;
        Ok(self
            .header(CONTENT_TYPE.as_str(), "application/json")
            .body(body))
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn normalize_name(name: String) -> String {
    name.trim().to_ascii_lowercase()
}

/// Why a transport could not produce a response
#[derive(Debug, Error)]
pub enum TransportFault {
    /// A structured error carrying its own message
    #[error(transparent)]
    Error(BoxError),

    /// A network failure with no further detail
    #[error("Network error")]
    Network,

    /// Any other failure with no further detail
    #[error("Unknown error")]
    Unknown,
}

impl TransportFault {
    pub fn error<E: Into<BoxError>>(error: E) -> Self {
        Self::Error(error.into())
    }

    /// Message used for the resulting [`NetworkError`].
    ///
    /// Structured errors contribute their message followed by their source
    /// chain; a structured error with a blank message counts as unknown.
    pub fn message(&self) -> String {
        match self {
            Self::Error(error) => {
                let mut message = error.to_string();
                if message.trim().is_empty() {
                    return Self::Unknown.to_string();
                }

                let mut source = error.source();
                while let Some(cause) = source {
                    let text = cause.to_string();
                    if !text.is_empty() && !message.contains(&text) {
                        message.push_str(": ");
                        message.push_str(&text);
                    }
                    source = cause.source();
                }
                message
            }
            Self::Network | Self::Unknown => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for TransportFault {
    fn from(error: reqwest::Error) -> Self {
        Self::Error(Box::new(error))
    }
}

impl From<url::ParseError> for TransportFault {
    fn from(error: url::ParseError) -> Self {
        Self::Error(Box::new(error))
    }
}

impl From<TransportFault> for NetworkError {
    fn from(fault: TransportFault) -> Self {
        NetworkError::new(fault.message())
    }
}
