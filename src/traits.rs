use crate::response::Response;
use crate::types::{RequestOptions, TransportFault};
use std::future::Future;

/// Trait for transports that perform the actual network exchange
pub trait Transport: Send + Sync {
    /// Send one request to `target` and return the response, or the fault
    /// that prevented one from being obtained
    fn send(
        &self,
        target: &str,
        options: &RequestOptions,
    ) -> impl Future<Output = std::result::Result<Response, TransportFault>> + Send;
}

impl<T: Transport> Transport for &T {
    fn send(
        &self,
        target: &str,
        options: &RequestOptions,
    ) -> impl Future<Output = std::result::Result<Response, TransportFault>> + Send {
        (**self).send(target, options)
    }
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    fn send(
        &self,
        target: &str,
        options: &RequestOptions,
    ) -> impl Future<Output = std::result::Result<Response, TransportFault>> + Send {
        (**self).send(target, options)
    }
}
