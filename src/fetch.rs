//! Request orchestration
//!
//! [`TypedFetch`] sends exactly one request through its transport and folds
//! every outcome into a [`RequestResult`]: transport faults become
//! [`NetworkError`]s, unsuccessful responses with a table entry become
//! [`HttpError`]s, and everything else is handed back as a response.

use crate::config::ClientConfig;
use crate::http::ReqwestTransport;
use crate::http_error::{HttpError, NetworkError, RequestError};
use crate::response::TypedResponse;
use crate::status::Classifier;
use crate::traits::Transport;
use crate::types::RequestOptions;
use std::sync::Arc;

/// Outcome of one request cycle
pub type RequestResult<T> = std::result::Result<TypedResponse<T>, RequestError>;

/// Request orchestrator over a transport and a classification table
#[derive(Clone)]
pub struct TypedFetch<C> {
    transport: C,
    classifier: Arc<Classifier>,
}

impl<C: Transport> TypedFetch<C> {
    /// Orchestrator using the standard classification table
    pub fn new(transport: C) -> Self {
        Self::with_classifier(transport, Classifier::standard())
    }

    /// Orchestrator using a substitute classification table
    pub fn with_classifier(transport: C, classifier: Arc<Classifier>) -> Self {
        Self {
            transport,
            classifier,
        }
    }

    pub fn transport(&self) -> &C {
        &self.transport
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Perform one request and classify its outcome
    pub async fn execute<T>(&self, target: &str, options: RequestOptions) -> RequestResult<T> {
        log::debug!("{} {}", options.method, target);

        let response = match self.transport.send(target, &options).await {
            Ok(response) => response,
            Err(fault) => {
                let error = NetworkError::from(fault);
                log::warn!("{} {} failed: {}", options.method, target, error);
                return Err(RequestError::Network(error));
            }
        };

        if response.ok() {
            return Ok(TypedResponse::new(response));
        }

        match self.classifier.classify(response.status()) {
            Some(kind) => {
                log::debug!("{} {} classified as {:?}", options.method, target, kind);
                Err(RequestError::Http(HttpError::new(kind, response)))
            }
            None => {
                // Unmapped failure statuses are handed back as responses.
                log::warn!(
                    "{} {} returned unclassified status {}",
                    options.method,
                    target,
                    response.status()
                );
                Ok(TypedResponse::new(response))
            }
        }
    }
}

/// Perform one request with a default [`ReqwestTransport`] and the standard
/// classification table
pub async fn fetch<T>(target: &str, options: RequestOptions) -> RequestResult<T> {
    let transport = ReqwestTransport::new(ClientConfig::default())
        .map_err(|e| RequestError::Network(NetworkError::new(e.to_string())))?;

    TypedFetch::new(transport).execute(target, options).await
}
