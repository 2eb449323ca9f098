//! Outbound request representation

use crate::{KlarnaError, Result};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::Method;
use url::Url;

/// One outbound HTTP call
///
/// The body is not part of the request; it is handed to
/// [`RequestFactory::send`](super::RequestFactory::send) together with it.
#[derive(Debug, Clone)]
pub struct Request {
    url: Url,
    method: Method,
    headers: HeaderMap,
}

impl Request {
    /// Create a GET request without headers
    pub fn new(url: Url) -> Self {
        Self {
            url,
            method: Method::GET,
            headers: HeaderMap::new(),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Look up a header value as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Set a header, replacing any previous value
    pub fn set_header(&mut self, name: HeaderName, value: &str) -> Result<()> {
        let value = HeaderValue::from_str(value)
            .map_err(|e| KlarnaError::invalid_header(format!("{}: {}", name, e)))?;
        self.headers.insert(name, value);
        Ok(())
    }
}
