//! `/api/*` relay to the upstream REST API.
//!
//! Method, path, query and body are passed through untouched. Only the
//! headers the client actually relies on cross the hop in either direction.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, Uri};
use axum::response::Response;

use crate::error::ProxyError;
use crate::state::AppState;

/// Request headers copied to the upstream request.
pub const FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

/// Upstream URL for an incoming request URI (path and query kept as-is).
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Subset of `incoming` that is forwarded upstream.
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_REQUEST_HEADERS {
        for value in incoming.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Relay one request and return the upstream status, content type and body.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, &uri);

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, %method, %url, "upstream request failed");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(error = %e, %method, %url, "upstream body read failed");
        ProxyError::Upstream(e.to_string())
    })?;

    tracing::debug!(%method, %url, status = status.as_u16(), "forwarded");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
