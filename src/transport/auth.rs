//! HTTP Basic authentication for merchant credentials

use super::Request;
use crate::Result;
use base64::{engine::general_purpose, Engine as _};
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Default `User-Agent` sent with every request
pub fn default_user_agent() -> String {
    format!("Library/klarna-rest_v{} Language/Rust", crate::VERSION)
}

/// Attaches merchant credentials and JSON headers to outgoing requests
#[derive(Clone)]
pub struct BasicAuthenticator {
    merchant_id: String,
    secret: String,
    user_agent: String,
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("merchant_id", &self.merchant_id)
            .field("secret", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl BasicAuthenticator {
    pub fn new(merchant_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            secret: secret.into(),
            user_agent: default_user_agent(),
        }
    }

    /// Replace the `User-Agent` value
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// `Basic base64(merchant_id:secret)`
    pub fn header_value(&self) -> String {
        let credentials = format!("{}:{}", self.merchant_id, self.secret);
        format!("Basic {}", general_purpose::STANDARD.encode(credentials))
    }

    /// Set the authorization, content negotiation and user agent headers
    pub fn authenticate(&self, request: &mut Request) -> Result<()> {
        request.set_header(AUTHORIZATION, &self.header_value())?;
        request.set_header(CONTENT_TYPE, JSON_CONTENT_TYPE)?;
        request.set_header(ACCEPT, JSON_CONTENT_TYPE)?;
        request.set_header(USER_AGENT, &self.user_agent)?;
        Ok(())
    }
}
