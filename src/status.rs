//! Status code classification
//!
//! Maps numeric HTTP status codes onto the closed set of [`HttpErrorKind`]s.
//! Only the standard 4xx/5xx codes listed in [`HttpErrorKind::ALL`] are
//! classified; everything else (1xx-3xx, non-standard codes such as 419 or
//! 420) falls through as `None`.

use crate::error::{FetchError, Result};
use crate::http_error::HttpError;
use crate::response::Response;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Broad class of a classified HTTP error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// 4xx
    Client,
    /// 5xx
    Server,
}

/// One concrete kind of classified HTTP error.
///
/// The status code and reason phrase are fixed per kind and do not depend on
/// the response a kind is later applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpErrorKind {
    BadRequest,
    Unauthorized,
    PaymentRequired,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    ProxyAuthenticationRequired,
    RequestTimeout,
    Conflict,
    Gone,
    LengthRequired,
    PreconditionFailed,
    RequestTooLong,
    RequestUriTooLong,
    UnsupportedMediaType,
    RequestedRangeNotSatisfiable,
    ExpectationFailed,
    ImATeapot,
    MisdirectedRequest,
    UnprocessableEntity,
    Locked,
    FailedDependency,
    TooEarly,
    UpgradeRequired,
    PreconditionRequired,
    TooManyRequests,
    RequestHeaderFieldsTooLarge,
    UnavailableForLegalReasons,
    InternalServerError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    HttpVersionNotSupported,
    VariantAlsoNegotiates,
    InsufficientStorage,
    LoopDetected,
    NotExtended,
    NetworkAuthenticationRequired,
}

impl HttpErrorKind {
    /// Every kind, in ascending status order
    pub const ALL: [HttpErrorKind; 40] = [
        Self::BadRequest,
        Self::Unauthorized,
        Self::PaymentRequired,
        Self::Forbidden,
        Self::NotFound,
        Self::MethodNotAllowed,
        Self::NotAcceptable,
        Self::ProxyAuthenticationRequired,
        Self::RequestTimeout,
        Self::Conflict,
        Self::Gone,
        Self::LengthRequired,
        Self::PreconditionFailed,
        Self::RequestTooLong,
        Self::RequestUriTooLong,
        Self::UnsupportedMediaType,
        Self::RequestedRangeNotSatisfiable,
        Self::ExpectationFailed,
        Self::ImATeapot,
        Self::MisdirectedRequest,
        Self::UnprocessableEntity,
        Self::Locked,
        Self::FailedDependency,
        Self::TooEarly,
        Self::UpgradeRequired,
        Self::PreconditionRequired,
        Self::TooManyRequests,
        Self::RequestHeaderFieldsTooLarge,
        Self::UnavailableForLegalReasons,
        Self::InternalServerError,
        Self::NotImplemented,
        Self::BadGateway,
        Self::ServiceUnavailable,
        Self::GatewayTimeout,
        Self::HttpVersionNotSupported,
        Self::VariantAlsoNegotiates,
        Self::InsufficientStorage,
        Self::LoopDetected,
        Self::NotExtended,
        Self::NetworkAuthenticationRequired,
    ];

    /// Canonical status code of this kind
    pub const fn status(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::PaymentRequired => 402,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::NotAcceptable => 406,
            Self::ProxyAuthenticationRequired => 407,
            Self::RequestTimeout => 408,
            Self::Conflict => 409,
            Self::Gone => 410,
            Self::LengthRequired => 411,
            Self::PreconditionFailed => 412,
            Self::RequestTooLong => 413,
            Self::RequestUriTooLong => 414,
            Self::UnsupportedMediaType => 415,
            Self::RequestedRangeNotSatisfiable => 416,
            Self::ExpectationFailed => 417,
            Self::ImATeapot => 418,
            Self::MisdirectedRequest => 421,
            Self::UnprocessableEntity => 422,
            Self::Locked => 423,
            Self::FailedDependency => 424,
            Self::TooEarly => 425,
            Self::UpgradeRequired => 426,
            Self::PreconditionRequired => 428,
            Self::TooManyRequests => 429,
            Self::RequestHeaderFieldsTooLarge => 431,
            Self::UnavailableForLegalReasons => 451,
            Self::InternalServerError => 500,
            Self::NotImplemented => 501,
            Self::BadGateway => 502,
            Self::ServiceUnavailable => 503,
            Self::GatewayTimeout => 504,
            Self::HttpVersionNotSupported => 505,
            Self::VariantAlsoNegotiates => 506,
            Self::InsufficientStorage => 507,
            Self::LoopDetected => 508,
            Self::NotExtended => 510,
            Self::NetworkAuthenticationRequired => 511,
        }
    }

    /// Canonical reason phrase of this kind
    pub const fn status_text(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::PaymentRequired => "Payment Required",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::NotAcceptable => "Not Acceptable",
            Self::ProxyAuthenticationRequired => "Proxy Authentication Required",
            Self::RequestTimeout => "Request Timeout",
            Self::Conflict => "Conflict",
            Self::Gone => "Gone",
            Self::LengthRequired => "Length Required",
            Self::PreconditionFailed => "Precondition Failed",
            Self::RequestTooLong => "Payload Too Large",
            Self::RequestUriTooLong => "URI Too Long",
            Self::UnsupportedMediaType => "Unsupported Media Type",
            Self::RequestedRangeNotSatisfiable => "Range Not Satisfiable",
            Self::ExpectationFailed => "Expectation Failed",
            Self::ImATeapot => "I'm a teapot",
            Self::MisdirectedRequest => "Misdirected Request",
            Self::UnprocessableEntity => "Unprocessable Entity",
            Self::Locked => "Locked",
            Self::FailedDependency => "Failed Dependency",
            Self::TooEarly => "Too Early",
            Self::UpgradeRequired => "Upgrade Required",
            Self::PreconditionRequired => "Precondition Required",
            Self::TooManyRequests => "Too Many Requests",
            Self::RequestHeaderFieldsTooLarge => "Request Header Fields Too Large",
            Self::UnavailableForLegalReasons => "Unavailable For Legal Reasons",
            Self::InternalServerError => "Internal Server Error",
            Self::NotImplemented => "Not Implemented",
            Self::BadGateway => "Bad Gateway",
            Self::ServiceUnavailable => "Service Unavailable",
            Self::GatewayTimeout => "Gateway Timeout",
            Self::HttpVersionNotSupported => "HTTP Version Not Supported",
            Self::VariantAlsoNegotiates => "Variant Also Negotiates",
            Self::InsufficientStorage => "Insufficient Storage",
            Self::LoopDetected => "Loop Detected",
            Self::NotExtended => "Not Extended",
            Self::NetworkAuthenticationRequired => "Network Authentication Required",
        }
    }

    /// Client (4xx) or server (5xx) class
    pub const fn class(self) -> ErrorClass {
        if self.status() >= 500 {
            ErrorClass::Server
        } else {
            ErrorClass::Client
        }
    }

    pub const fn is_client_error(self) -> bool {
        matches!(self.class(), ErrorClass::Client)
    }

    pub const fn is_server_error(self) -> bool {
        matches!(self.class(), ErrorClass::Server)
    }

    /// Wrap a failed response into an error of this kind
    pub fn into_error(self, response: Response) -> HttpError {
        HttpError::new(self, response)
    }
}

impl fmt::Display for HttpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status(), self.status_text())
    }
}

static STANDARD: Lazy<Arc<Classifier>> = Lazy::new(|| {
    Arc::new(Classifier {
        table: HttpErrorKind::ALL
            .iter()
            .map(|kind| (kind.status(), *kind))
            .collect(),
    })
});

/// Read-only status code → error kind table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    table: BTreeMap<u16, HttpErrorKind>,
}

impl Classifier {
    /// The process-wide table covering every standard 4xx/5xx code
    pub fn standard() -> Arc<Classifier> {
        Arc::clone(&STANDARD)
    }

    /// Build a table mapping each kind's own status code to it
    pub fn from_kinds<I>(kinds: I) -> Result<Self>
    where
        I: IntoIterator<Item = HttpErrorKind>,
    {
        Self::from_entries(kinds.into_iter().map(|kind| (kind.status(), kind)))
    }

    /// Build a table from explicit `(status, kind)` pairs.
    ///
    /// A status code may appear only once.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u16, HttpErrorKind)>,
    {
        let mut table = BTreeMap::new();
        for (status, kind) in entries {
            if table.insert(status, kind).is_some() {
                return Err(FetchError::DuplicateStatus { status });
            }
        }
        Ok(Self { table })
    }

    /// Look up the kind that represents `status`, if any
    pub fn classify(&self, status: u16) -> Option<HttpErrorKind> {
        self.table.get(&status).copied()
    }

    pub fn contains(&self, status: u16) -> bool {
        self.table.contains_key(&status)
    }

    /// Entries in ascending status order
    pub fn iter(&self) -> impl Iterator<Item = (u16, HttpErrorKind)> + '_ {
        self.table.iter().map(|(status, kind)| (*status, *kind))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::clone(&STANDARD)
    }
}
