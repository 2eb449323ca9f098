//! Connector configuration

use crate::{KlarnaError, Result};
use std::env;
use std::time::Duration;

/// Live environment, Europe
pub const EU_BASE_URL: &str = "https://api.klarna.com/";
/// Playground environment, Europe
pub const EU_TEST_BASE_URL: &str = "https://api.playground.klarna.com/";
/// Live environment, North America
pub const NA_BASE_URL: &str = "https://api-na.klarna.com/";
/// Playground environment, North America
pub const NA_TEST_BASE_URL: &str = "https://api-na.playground.klarna.com/";

/// Environment variable holding the merchant id
pub const MERCHANT_ID_ENV: &str = "KLARNA_MERCHANT_ID";
/// Environment variable holding the shared secret
pub const SHARED_SECRET_ENV: &str = "KLARNA_SHARED_SECRET";
/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "KLARNA_BASE_URL";

/// Credentials and endpoint for a [`Connector`](crate::transport::Connector)
#[derive(Clone)]
pub struct ConnectorConfig {
    pub merchant_id: String,
    pub secret: String,
    /// Absolute base URL every relative resource path is resolved against
    pub base_url: String,
    /// Request timeout
    pub timeout: Option<Duration>,
    /// Replacement for the default `User-Agent`
    pub user_agent: Option<String>,
}

impl std::fmt::Debug for ConnectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorConfig")
            .field("merchant_id", &self.merchant_id)
            .field("secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ConnectorConfig {
    pub fn new(
        merchant_id: impl Into<String>,
        secret: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            secret: secret.into(),
            base_url: base_url.into(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Read credentials from `KLARNA_MERCHANT_ID` and `KLARNA_SHARED_SECRET`.
    ///
    /// The base URL comes from `KLARNA_BASE_URL` and defaults to the European
    /// playground.
    pub fn from_env() -> Result<Self> {
        let merchant_id = env::var(MERCHANT_ID_ENV).unwrap_or_default();
        let secret = env::var(SHARED_SECRET_ENV).unwrap_or_default();
        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| EU_TEST_BASE_URL.to_string());

        let config = Self::new(merchant_id, secret, base_url);
        config.validate().map_err(|e| {
            KlarnaError::config(format!(
                "{} (set {} and {})",
                e, MERCHANT_ID_ENV, SHARED_SECRET_ENV
            ))
        })?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.merchant_id.is_empty() {
            return Err(KlarnaError::config("Merchant id cannot be empty"));
        }

        if self.secret.is_empty() {
            return Err(KlarnaError::config("Shared secret cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(KlarnaError::config(
                "Base URL must start with http:// or https://",
            ));
        }

        Ok(())
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header value
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
