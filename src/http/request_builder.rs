use crate::error::FetchError;
use crate::types::{RequestOptions, TransportFault};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Request};
use std::collections::HashMap;
use url::Url;

/// Turns a target and [`RequestOptions`] into a reqwest request
#[derive(Clone)]
pub struct RequestBuilderImpl {
    client: Client,
}

impl RequestBuilderImpl {
    /// Create a new request builder
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build the request; an unparsable target or header is a fault
    pub fn build_request(
        &self,
        target: &str,
        options: &RequestOptions,
    ) -> std::result::Result<Request, TransportFault> {
        let url = Url::parse(target)?;

        let mut request_builder = self
            .client
            .request(options.method.clone(), url)
            .headers(header_map(&options.headers).map_err(TransportFault::error)?);

        if let Some(body) = &options.body {
            request_builder = request_builder.body(body.clone());
        }

        if let Some(timeout) = options.timeout {
            request_builder = request_builder.timeout(timeout);
        }

        Ok(request_builder.build()?)
    }
}

/// Convert a plain header map.
///
/// Names that differ only in case are applied in sorted order, so the
/// lower-case spelling wins and the outcome does not depend on map order.
pub(crate) fn header_map(
    headers: &HashMap<String, String>,
) -> std::result::Result<HeaderMap, FetchError> {
    let mut entries: Vec<_> = headers.iter().collect();
    entries.sort();

    let mut map = HeaderMap::with_capacity(entries.len());
    for (name, value) in entries {
        let header_name = HeaderName::from_bytes(name.trim().as_bytes())
            .map_err(|_| FetchError::invalid_header(name.clone()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| FetchError::invalid_header(name.clone()))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use std::time::Duration;

    fn builder() -> RequestBuilderImpl {
        RequestBuilderImpl::new(Client::new())
    }

    #[test]
    fn test_build_request() {
        let options = RequestOptions::post()
            .header("Content-Type", "application/json")
            .body(r#"{"test": "data"}"#)
            .timeout(Duration::from_secs(2));

        let request = builder()
            .build_request("https://api.example.com/api/test", &options)
            .unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.url().as_str(), "https://api.example.com/api/test");
        assert_eq!(request.headers()["content-type"], "application/json");
        assert_eq!(request.timeout(), Some(&Duration::from_secs(2)));
        assert_eq!(
            request.body().and_then(|b| b.as_bytes()),
            Some(&br#"{"test": "data"}"#[..])
        );
    }

    #[test]
    fn test_content_type_is_stable() {
        let options = RequestOptions::post()
            .header("Content-Type", "text/plain")
            .json(&serde_json::json!({"a": 1}))
            .unwrap();

        for _ in 0..50 {
            let request = builder()
                .build_request("https://api.example.com/items", &options)
                .unwrap();
            assert_eq!(request.headers()["content-type"], "application/json");
        }
    }

    #[test]
    fn test_mixed_case_names_resolve_deterministically() {
        let mut headers = HashMap::new();
        headers.insert("X-Mode".to_string(), "upper".to_string());
        headers.insert("x-mode".to_string(), "lower".to_string());

        let map = header_map(&headers).unwrap();
        assert_eq!(map.get_all("x-mode").iter().count(), 1);
        assert_eq!(map["x-mode"], "lower");
    }

    #[test]
    fn test_invalid_target_is_fault() {
        let result = builder().build_request("not a url", &RequestOptions::new());
        let fault = result.unwrap_err();
        assert_eq!(fault.message(), "relative URL without a base");
    }

    #[test]
    fn test_invalid_header_is_fault() {
        let options = RequestOptions::new().header("bad header", "x");
        let fault = builder()
            .build_request("https://example.com", &options)
            .unwrap_err();
        assert!(fault.message().contains("bad header"));
    }
}
