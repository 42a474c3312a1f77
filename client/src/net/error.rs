//! Failure shapes produced by REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every API helper returns `Result<_, ApiError>`. The session layer turns an
//! `ApiError` into a user-facing message; nothing here is shown verbatim.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// No response was received (offline, CORS, DNS, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// A response arrived but its body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request could not be assembled (payload encoding, form data).
    #[error("request build failed: {0}")]
    Request(String),

    /// Browser-only endpoint invoked during server-side rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a raw response body, keeping its `message`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message);
        Self::Status { status, message }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-supplied message. Blank messages count as absent.
    pub fn body_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }
}
