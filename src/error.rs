//! Error types for the Klarna REST client
//!
//! Every fallible operation returns [`Result`], whose error side is the tagged
//! [`KlarnaError`]. Callers branch on the variant instead of downcasting:
//!
//! - [`KlarnaError::Transport`] - the request never produced a response
//! - [`KlarnaError::Http`] - a non-2xx response without an interpretable body
//! - [`KlarnaError::Api`] - the API rejected the request with a structured error
//! - [`KlarnaError::MalformedResponse`] / [`KlarnaError::Decode`] - a 2xx response
//!   that breaks the response contract
//! - [`KlarnaError::Precondition`] - the caller used an unbound resource

use crate::models::ErrorMessage;
use crate::transport::Response;
use http::StatusCode;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, KlarnaError>;

/// Errors surfaced by connector and resource operations
#[derive(Debug, Error)]
pub enum KlarnaError {
    /// Network-level failure (connect, TLS, timeout, body read)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response whose body is empty, not JSON, or not an error message
    #[error("HTTP request failed with status {status}")]
    Http { status: StatusCode, body: String },

    /// Non-2xx response carrying a structured error message
    #[error("API error ({status}): {message}")]
    Api {
        status: StatusCode,
        error: ErrorMessage,
        message: String,
    },

    /// Successful response that is missing something the operation requires
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Operation needs a resource location that is not known yet
    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The caller's cancellation token fired before the call completed
    #[error("Request cancelled")]
    Cancelled,
}

impl KlarnaError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a malformed response error
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Create a precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// Create an invalid header error
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader(message.into())
    }

    /// Classify a non-2xx response.
    ///
    /// A JSON body that decodes as [`ErrorMessage`] becomes [`KlarnaError::Api`];
    /// anything else is kept as the raw [`KlarnaError::Http`] failure.
    pub fn from_response(response: Response) -> Self {
        let status = response.status();

        if response.has_body() && response.is_json() {
            if let Ok(error) = response.data::<ErrorMessage>() {
                let message = error.to_string();
                return Self::Api {
                    status,
                    error,
                    message,
                };
            }
        }

        Self::Http {
            status,
            body: response.into_body(),
        }
    }

    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Structured error payload of an API rejection
    pub fn error_message(&self) -> Option<&ErrorMessage> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Whether the API rejected the request with a structured error
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}
