use crate::response::Response;
use crate::traits::Transport;
use crate::types::{RequestOptions, TransportFault};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock transport replaying queued outcomes in order
#[derive(Debug, Default)]
pub struct MockTransport {
    outcomes: Mutex<VecDeque<std::result::Result<Response, TransportFault>>>,
    requests: Mutex<Vec<(String, RequestOptions)>>,
    calls: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: Response) -> Self {
        self.push(Ok(response));
        self
    }

    pub fn with_fault(self, fault: TransportFault) -> Self {
        self.push(Err(fault));
        self
    }

    fn push(&self, outcome: std::result::Result<Response, TransportFault>) {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push_back(outcome);
        }
    }

    /// Number of times `send` was called
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Targets and options seen so far
    pub fn requests(&self) -> Vec<(String, RequestOptions)> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Transport for MockTransport {
    async fn send(
        &self,
        target: &str,
        options: &RequestOptions,
    ) -> std::result::Result<Response, TransportFault> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((target.to_string(), options.clone()));
        }

        let next = self
            .outcomes
            .lock()
            .ok()
            .and_then(|mut outcomes| outcomes.pop_front());

        next.unwrap_or_else(|| {
            Err(TransportFault::error(format!(
                "Mock response not found for target: {}",
                target
            )))
        })
    }
}

/// Helper functions for creating test data
pub mod test_helpers {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

    pub fn json_response(status: u16, body: &str) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Response::new(status, headers, body.to_string())
    }

    pub fn text_response(status: u16, body: &str) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        Response::new(status, headers, body.to_string())
    }
}
