//! Error payload returned by the API on rejected requests

use serde::{Deserialize, Serialize};

/// Structured error body of a non-2xx response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Machine-readable error code (e.g. "BAD_VALUE")
    pub error_code: String,
    /// Human-readable details
    #[serde(default)]
    pub error_messages: Vec<String>,
    /// Identifier to quote when contacting merchant support
    #[serde(default)]
    pub correlation_id: String,
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error_code)?;
        if !self.error_messages.is_empty() {
            write!(f, ": {}", self.error_messages.join("; "))?;
        }
        if !self.correlation_id.is_empty() {
            write!(f, " (correlation id {})", self.correlation_id)?;
        }
        Ok(())
    }
}
