//! Authenticated, base-URL-bound request façade

use super::{BasicAuthenticator, HttpRequestFactory, Request, RequestFactory, Response};
use crate::config::ConnectorConfig;
use crate::{KlarnaError, Result};
use http::Method;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Single choke point through which every resource issues HTTP calls
///
/// The connector owns no per-call state: each call builds its own
/// [`Request`]/[`Response`] pair, so one connector can be cloned and shared
/// by any number of resources and tasks.
#[derive(Clone)]
pub struct Connector {
    factory: Arc<dyn RequestFactory>,
    authenticator: BasicAuthenticator,
    base_url: Url,
}

impl std::fmt::Debug for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connector")
            .field("base_url", &self.base_url.as_str())
            .field("authenticator", &self.authenticator)
            .field("factory", &"<request factory>")
            .finish()
    }
}

impl Connector {
    /// Create a connector over an arbitrary request factory
    pub fn new(
        factory: Arc<dyn RequestFactory>,
        merchant_id: impl Into<String>,
        secret: impl Into<String>,
        base_url: &str,
    ) -> Result<Self> {
        Self::with_authenticator(
            factory,
            BasicAuthenticator::new(merchant_id, secret),
            base_url,
        )
    }

    /// Create a connector with a preconfigured authenticator
    pub fn with_authenticator(
        factory: Arc<dyn RequestFactory>,
        authenticator: BasicAuthenticator,
        base_url: &str,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(KlarnaError::config(format!(
                "Base URL must be an absolute http(s) URL, got {}",
                base_url
            )));
        }

        Ok(Self {
            factory,
            authenticator,
            base_url,
        })
    }

    /// Create a connector that talks HTTP through reqwest
    pub fn with_http(
        merchant_id: impl Into<String>,
        secret: impl Into<String>,
        base_url: &str,
    ) -> Result<Self> {
        Self::new(
            Arc::new(HttpRequestFactory::new()?),
            merchant_id,
            secret,
            base_url,
        )
    }

    /// Create a reqwest-backed connector from validated configuration
    pub fn from_config(config: &ConnectorConfig) -> Result<Self> {
        config.validate()?;

        let mut authenticator = BasicAuthenticator::new(&config.merchant_id, &config.secret);
        if let Some(user_agent) = &config.user_agent {
            authenticator = authenticator.with_user_agent(user_agent);
        }

        Self::with_authenticator(
            Arc::new(HttpRequestFactory::with_timeout(config.timeout)?),
            authenticator,
            &config.base_url,
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn authenticator(&self) -> &BasicAuthenticator {
        &self.authenticator
    }

    /// Resolve `url` against the base URL.
    ///
    /// - empty: the base URL
    /// - starts with the base URL: verbatim
    /// - otherwise: base and `url` joined by exactly one `/`, even when `url`
    ///   is an absolute URL on another host
    pub fn resolve_url(&self, url: &str) -> String {
        let base = self.base_url.as_str();

        if url.is_empty() {
            return base.to_string();
        }

        if url.starts_with(base) {
            return url.to_string();
        }

        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            url.trim_start_matches('/')
        )
    }

    /// Create an authenticated request for `url` with `method`
    pub fn create_request(&self, url: &str, method: Method) -> Result<Request> {
        let resolved = self.resolve_url(url);
        tracing::debug!("Creating {} request for {}", method, resolved);

        let mut request = self.factory.create_request(&resolved)?;
        request.set_method(method);
        self.authenticator.authenticate(&mut request)?;

        Ok(request)
    }

    /// Send a request created by [`create_request`](Self::create_request)
    pub async fn send(&self, request: Request, payload: &str) -> Result<Response> {
        tracing::debug!("Sending {} request to: {}", request.method(), request.url());
        self.factory.send(request, payload).await
    }

    /// Like [`send`](Self::send), but gives up with [`KlarnaError::Cancelled`]
    /// as soon as `token` is cancelled
    pub async fn send_with_cancellation(
        &self,
        request: Request,
        payload: &str,
        token: &CancellationToken,
    ) -> Result<Response> {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!("Request cancelled by caller");
                Err(KlarnaError::Cancelled)
            }
            result = self.send(request, payload) => result,
        }
    }
}

