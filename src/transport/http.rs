//! reqwest-backed request factory

use super::{Request, RequestFactory, Response};
use crate::{KlarnaError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// [`RequestFactory`] that performs real HTTP calls through reqwest
#[derive(Debug, Clone)]
pub struct HttpRequestFactory {
    client: Client,
}

impl HttpRequestFactory {
    /// Create a factory with reqwest's default settings
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    /// Create a factory whose calls give up after `timeout`
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut client_builder = Client::builder();

        if let Some(timeout) = timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| KlarnaError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RequestFactory for HttpRequestFactory {
    fn create_request(&self, url: &str) -> Result<Request> {
        Ok(Request::new(Url::parse(url)?))
    }

    async fn send(&self, request: Request, payload: &str) -> Result<Response> {
        let mut builder = self
            .client
            .request(request.method().clone(), request.url().clone())
            .headers(request.headers().clone());

        if !payload.is_empty() {
            builder = builder.body(payload.as_bytes().to_vec());
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        tracing::debug!(
            "{} {} -> {} ({} bytes)",
            request.method(),
            request.url(),
            status,
            body.len()
        );

        let response = Response::new(status, headers, body);

        if !status.is_success() {
            tracing::warn!(
                "Request {} {} failed with status: {}",
                request.method(),
                request.url(),
                status
            );
            return Err(KlarnaError::from_response(response));
        }

        Ok(response)
    }
}
