//! HTTP transport layer
//!
//! Everything a resource sends goes through the [`Connector`], which resolves
//! the target URL against its base, authenticates the request with
//! [`BasicAuthenticator`] and hands it to a [`RequestFactory`] for delivery.
//!
//! # Architecture
//!
//! - [`Request`] / [`Response`] - transport-neutral request and fully-read response
//! - [`RequestFactory`] - the capability seam; [`HttpRequestFactory`] is the reqwest
//!   implementation, tests substitute their own
//! - [`BasicAuthenticator`] - credential and content headers
//! - [`Connector`] - URL resolution plus the above
//!
//! # Examples
//!
//! ```no_run
//! use klarna_rest::transport::Connector;
//! use http::Method;
//!
//! # async fn example() -> klarna_rest::Result<()> {
//! let connector = Connector::with_http(
//!     "merchant_id",
//!     "shared_secret",
//!     klarna_rest::config::EU_TEST_BASE_URL,
//! )?;
//!
//! let request = connector.create_request("/ordermanagement/v1/orders/1234", Method::GET)?;
//! let response = connector.send(request, "").await?;
//! println!("Status: {}", response.status());
//! # Ok(())
//! # }
//! ```

use crate::Result;
use async_trait::async_trait;

pub mod auth;
pub mod connector;
pub mod http;
pub mod request;
pub mod response;

#[cfg(test)]
pub(crate) mod testing;


pub use auth::BasicAuthenticator;
pub use connector::Connector;
pub use http::HttpRequestFactory;
pub use request::Request;
pub use response::Response;

/// Creates and delivers raw HTTP requests
///
/// Implementations must read the whole response body before returning and
/// turn non-2xx responses into errors via
/// [`KlarnaError::from_response`](crate::KlarnaError::from_response).
#[async_trait]
pub trait RequestFactory: Send + Sync {
    /// Build an unauthenticated GET request for an absolute URL
    fn create_request(&self, url: &str) -> Result<Request>;

    /// Send `request`, writing `payload` as the UTF-8 body when non-empty
    async fn send(&self, request: Request, payload: &str) -> Result<Response>;
}
