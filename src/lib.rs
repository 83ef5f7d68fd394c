//! Typed Fetch - HTTP requests with classified failures
//!
//! This crate performs one HTTP request per call and returns a
//! [`RequestResult`]: either the response, or exactly one of a classified
//! [`HttpError`] (one kind per standard 4xx/5xx status) or a
//! [`NetworkError`] when no response could be obtained.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Classification and failure types
pub mod http_error;
pub mod response;
pub mod status;

// Main functionality modules
pub mod fetch;
pub mod http;
pub mod traits;

// Test support
pub mod testing;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{FetchError, Result};
pub use fetch::{fetch, RequestResult, TypedFetch};
pub use http::ReqwestTransport;
pub use http_error::{is_classified_error, HttpError, NetworkError, RequestError};
pub use response::{Blob, Response, TypedResponse};
pub use status::{Classifier, ErrorClass, HttpErrorKind};
pub use traits::Transport;
pub use types::{RequestOptions, TransportFault};

// Re-export the HTTP vocabulary used by requests and responses
pub use reqwest::header;
pub use reqwest::Method;
