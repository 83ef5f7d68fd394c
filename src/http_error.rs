//! Request failure types
//!
//! A request fails in exactly one of two ways: the server answered with a
//! classified error status ([`HttpError`]), or no response was obtained at
//! all ([`NetworkError`]). [`RequestError`] is the union of the two.

use crate::error::Result;
use crate::response::{Blob, Response};
use crate::status::{ErrorClass, HttpErrorKind};
use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// A failed response classified by its status code
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct HttpError {
    kind: HttpErrorKind,
    response: Response,
}

impl HttpError {
    /// Wrap `response` as an error of `kind`.
    ///
    /// The response status is not checked against the kind.
    pub fn new(kind: HttpErrorKind, response: Response) -> Self {
        Self { kind, response }
    }

    pub fn kind(&self) -> HttpErrorKind {
        self.kind
    }

    pub fn status(&self) -> u16 {
        self.kind.status()
    }

    pub fn status_text(&self) -> &'static str {
        self.kind.status_text()
    }

    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }

    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }

    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    pub fn headers(&self) -> &HeaderMap {
        self.response.headers()
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn into_response(self) -> Response {
        self.response
    }

    pub fn body_used(&self) -> bool {
        self.response.body_used()
    }

    pub fn json<T: DeserializeOwned>(&mut self) -> Result<T> {
        self.response.json()
    }

    pub fn text(&mut self) -> Result<String> {
        self.response.text()
    }

    pub fn blob(&mut self) -> Result<Blob> {
        self.response.blob()
    }

    pub fn bytes(&mut self) -> Result<Bytes> {
        self.response.bytes()
    }

    /// Same kind over a duplicated response, readable independently
    pub fn duplicate(&self) -> HttpError {
        HttpError::new(self.kind, self.response.duplicate())
    }
}

/// No response was obtained
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NetworkError {
    message: String,
}

impl NetworkError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for NetworkError {
    fn default() -> Self {
        Self::new("Network error")
    }
}

/// Failure side of a [`crate::RequestResult`]
#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl RequestError {
    /// True for a classified HTTP error
    pub fn is_classified(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn kind(&self) -> Option<HttpErrorKind> {
        match self {
            Self::Http(error) => Some(error.kind()),
            Self::Network(_) => None,
        }
    }

    pub fn as_http(&self) -> Option<&HttpError> {
        match self {
            Self::Http(error) => Some(error),
            Self::Network(_) => None,
        }
    }

    pub fn as_network(&self) -> Option<&NetworkError> {
        match self {
            Self::Network(error) => Some(error),
            Self::Http(_) => None,
        }
    }

    pub fn into_http(self) -> Option<HttpError> {
        match self {
            Self::Http(error) => Some(error),
            Self::Network(_) => None,
        }
    }
}

/// Whether `error` is one of the classified HTTP error variants.
///
/// Accepts a bare [`HttpError`] or a [`RequestError::Http`]; anything else,
/// including [`NetworkError`], is not classified.
pub fn is_classified_error(error: &(dyn std::error::Error + 'static)) -> bool {
    if error.is::<HttpError>() {
        return true;
    }
    matches!(
        error.downcast_ref::<RequestError>(),
        Some(RequestError::Http(_))
    )
}
