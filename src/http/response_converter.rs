use crate::response::Response;
use crate::types::TransportFault;

/// Buffers a reqwest response into a [`Response`]
#[derive(Clone)]
pub struct ResponseConverterImpl;

impl ResponseConverterImpl {
    /// Create a new response converter
    pub fn new() -> Self {
        Self
    }

    /// Convert a reqwest response, reading its body to the end.
    ///
    /// A body that cannot be read completely is reported as a fault.
    pub async fn convert_response(
        &self,
        response: reqwest::Response,
    ) -> std::result::Result<Response, TransportFault> {
        let status = response.status();
        let url = response.url().clone();
        let headers = response.headers().clone();

        let body = response.bytes().await?;

        Ok(Response::new(status.as_u16(), headers, body)
            .with_ok(status.is_success())
            .with_url(url))
    }
}

impl Default for ResponseConverterImpl {
    fn default() -> Self {
        Self::new()
    }
}
