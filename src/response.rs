//! Response handles
//!
//! A [`Response`] carries the status, headers and a buffered body that may be
//! read exactly once. [`Response::duplicate`] yields a second handle with its
//! own readable copy of the body.

use crate::error::{FetchError, Result};
use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use url::Url;

/// Raw body bytes together with the declared content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    content_type: Option<String>,
    bytes: Bytes,
}

impl Blob {
    pub fn new(content_type: Option<String>, bytes: Bytes) -> Self {
        Self {
            content_type,
            bytes,
        }
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

/// HTTP response with a single-consumption body
#[derive(Debug)]
pub struct Response {
    status: u16,
    status_text: String,
    ok: bool,
    headers: HeaderMap,
    url: Option<Url>,
    body: Option<Bytes>,
}

impl Response {
    /// Create a response. The success flag defaults to "status is 2xx" and
    /// the status text to the canonical reason phrase, if one exists.
    pub fn new(status: u16, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        let status_text = StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or_default()
            .to_string();

        Self {
            status,
            status_text,
            ok: (200..300).contains(&status),
            headers,
            url: None,
            body: Some(body.into()),
        }
    }

    /// Override the success flag reported by the transport
    pub fn with_ok(mut self, ok: bool) -> Self {
        self.ok = ok;
        self
    }

    pub fn with_status_text<S: Into<String>>(mut self, status_text: S) -> Self {
        self.status_text = status_text.into();
        self
    }

    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Reason phrase as received, which may be empty
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Whether the transport considers the exchange successful
    pub fn ok(&self) -> bool {
        self.ok
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Final URL, when the transport reports one
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    /// True once any body reader has been called
    pub fn body_used(&self) -> bool {
        self.body.is_none()
    }

    fn take_body(&mut self) -> Result<Bytes> {
        self.body.take().ok_or(FetchError::BodyAlreadyConsumed)
    }

    /// Read the body as raw bytes
    pub fn bytes(&mut self) -> Result<Bytes> {
        self.take_body()
    }

    /// Read the body as UTF-8 text, replacing invalid sequences
    pub fn text(&mut self) -> Result<String> {
        let bytes = self.take_body()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read the body together with its content type
    pub fn blob(&mut self) -> Result<Blob> {
        let bytes = self.take_body()?;
        Ok(Blob::new(self.content_type().map(str::to_string), bytes))
    }

    /// Parse the body as JSON
    pub fn json<T: DeserializeOwned>(&mut self) -> Result<T> {
        let bytes = self.take_body()?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Independent handle over the same status, headers and body.
    ///
    /// If this handle's body was already read, so is the duplicate's.
    pub fn duplicate(&self) -> Response {
        Response {
            status: self.status,
            status_text: self.status_text.clone(),
            ok: self.ok,
            headers: self.headers.clone(),
            url: self.url.clone(),
            body: self.body.clone(),
        }
    }
}

/// A response whose JSON body is expected to parse as `T`
pub struct TypedResponse<T> {
    response: Response,
    _body: PhantomData<fn() -> T>,
}

impl<T> TypedResponse<T> {
    pub fn new(response: Response) -> Self {
        Self {
            response,
            _body: PhantomData,
        }
    }

    pub fn into_inner(self) -> Response {
        self.response
    }

    pub fn duplicate(&self) -> Self {
        Self::new(self.response.duplicate())
    }
}

impl<T: DeserializeOwned> TypedResponse<T> {
    /// Parse the body as `T`
    pub fn json(&mut self) -> Result<T> {
        self.response.json()
    }
}

impl<T> Deref for TypedResponse<T> {
    type Target = Response;

    fn deref(&self) -> &Response {
        &self.response
    }
}

impl<T> DerefMut for TypedResponse<T> {
    fn deref_mut(&mut self) -> &mut Response {
        &mut self.response
    }
}

impl<T> From<Response> for TypedResponse<T> {
    fn from(response: Response) -> Self {
        Self::new(response)
    }
}

impl<T> fmt::Debug for TypedResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedResponse")
            .field("response", &self.response)
            .finish()
    }
}
