use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::request_builder::header_map;
use crate::http::{RequestBuilderImpl, ResponseConverterImpl};
use crate::response::Response;
use crate::traits::Transport;
use crate::types::{RequestOptions, TransportFault};
use reqwest::Client;

/// Transport backed by a `reqwest` client
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    request_builder: RequestBuilderImpl,
    response_converter: ResponseConverterImpl,
}

impl ReqwestTransport {
    /// Create a new transport with configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder()
            .timeout(config.timeout())
            .redirect(if config.follow_redirects() {
                reqwest::redirect::Policy::default()
            } else {
                reqwest::redirect::Policy::none()
            });

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        if let Some(headers) = &config.headers {
            builder = builder.default_headers(header_map(headers)?);
        }

        Ok(Self::from_client(builder.build()?))
    }

    /// Wrap an already configured client
    pub fn from_client(client: Client) -> Self {
        Self {
            request_builder: RequestBuilderImpl::new(client.clone()),
            response_converter: ResponseConverterImpl::new(),
            client,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl Transport for ReqwestTransport {
    async fn send(
        &self,
        target: &str,
        options: &RequestOptions,
    ) -> std::result::Result<Response, TransportFault> {
        let request = self.request_builder.build_request(target, options)?;
        let response = self.client.execute(request).await?;

        self.response_converter.convert_response(response).await
    }
}
