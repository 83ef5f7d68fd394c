//! Shared test utilities for typed-fetch integration tests
//!
//! Provides a scripted transport plus factory helpers for responses and
//! faults.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use typed_fetch::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use typed_fetch::{RequestOptions, Response, Transport, TransportFault};

/// Transport replaying scripted outcomes, one per call
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<Response, TransportFault>>>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub fn responding(response: Response) -> Self {
        let transport = Self::default();
        transport.push(Ok(response));
        transport
    }

    pub fn failing(fault: TransportFault) -> Self {
        let transport = Self::default();
        transport.push(Err(fault));
        transport
    }

    pub fn push(&self, outcome: Result<Response, TransportFault>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, _target: &str, _options: &RequestOptions) -> Result<Response, TransportFault> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TransportFault::Unknown))
    }
}

/// Helper function to create a JSON response with a specific status
pub fn json_response(status: u16, body: &str) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Response::new(status, headers, body.to_string())
}

/// Error with an empty message, standing in for a fault without detail
#[derive(Debug)]
pub struct SilentError;

impl fmt::Display for SilentError {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl Error for SilentError {}

/// Status codes present in the classification table with their reason phrases
pub const TABLE: [(u16, &str); 40] = [
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (407, "Proxy Authentication Required"),
    (408, "Request Timeout"),
    (409, "Conflict"),
    (410, "Gone"),
    (411, "Length Required"),
    (412, "Precondition Failed"),
    (413, "Payload Too Large"),
    (414, "URI Too Long"),
    (415, "Unsupported Media Type"),
    (416, "Range Not Satisfiable"),
    (417, "Expectation Failed"),
    (418, "I'm a teapot"),
    (421, "Misdirected Request"),
    (422, "Unprocessable Entity"),
    (423, "Locked"),
    (424, "Failed Dependency"),
    (425, "Too Early"),
    (426, "Upgrade Required"),
    (428, "Precondition Required"),
    (429, "Too Many Requests"),
    (431, "Request Header Fields Too Large"),
    (451, "Unavailable For Legal Reasons"),
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Timeout"),
    (505, "HTTP Version Not Supported"),
    (506, "Variant Also Negotiates"),
    (507, "Insufficient Storage"),
    (508, "Loop Detected"),
    (510, "Not Extended"),
    (511, "Network Authentication Required"),
];
