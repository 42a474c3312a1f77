//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest::Client` and the upstream base URL; the host
//! keeps no per-user state of its own.

use std::sync::Arc;
use std::time::Duration;

use crate::config::UpstreamTimeouts;
use crate::error::StartupError;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: Arc<str>,
}

impl AppState {
    pub fn new(upstream: &str, timeouts: UpstreamTimeouts) -> Result<Self, StartupError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| StartupError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, upstream: Arc::from(upstream) })
    }
}
