//! Error types for startup and request forwarding.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Message returned to the browser when the upstream API cannot be reached.
pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "upstream unavailable";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is unset or blank.
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    /// An environment variable holds a value that cannot be used.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Failure to relay one `/api/*` request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// Connecting to, or reading from, the upstream failed.
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "message": UPSTREAM_UNAVAILABLE_MESSAGE }))).into_response()
    }
}

/// Anything that stops the host from coming up.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind: {0}")]
    Bind(std::io::Error),

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
