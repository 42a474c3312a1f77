use std::net::SocketAddr;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::http::header::COOKIE;
use axum::routing::{any, delete, post};
use serde_json::{Value, json};

use super::*;
use crate::config::UpstreamTimeouts;
use crate::routes::api_routes;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/auth/me?fresh=1".parse().unwrap();
    assert_eq!(upstream_url("http://api.internal:5000", &uri), "http://api.internal:5000/api/auth/me?fresh=1");
}

#[test]
fn upstream_url_tolerates_trailing_slash_on_base() {
    let uri: Uri = "/api/auth/profile".parse().unwrap();
    assert_eq!(upstream_url("https://api.example.test/", &uri), "https://api.example.test/api/auth/profile");
}

// =============================================================================
// forwarded_headers
// =============================================================================

#[test]
fn forwarded_headers_keeps_only_allow_list() {
    let mut incoming = HeaderMap::new();
    incoming.insert(AUTHORIZATION, "Bearer abc".parse().unwrap());
    incoming.insert(CONTENT_TYPE, "application/json".parse().unwrap());
    incoming.insert(ACCEPT, "*/*".parse().unwrap());
    incoming.insert(COOKIE, "sid=1".parse().unwrap());
    incoming.insert("x-forwarded-for", "10.0.0.1".parse().unwrap());

    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 3);
    assert_eq!(out.get(AUTHORIZATION).unwrap(), "Bearer abc");
    assert!(out.get(COOKIE).is_none());
}

#[test]
fn forwarded_headers_without_authorization_sends_none() {
    let out = forwarded_headers(&HeaderMap::new());
    assert!(out.is_empty());
}

// =============================================================================
// End to end against an in-process upstream
// =============================================================================

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Value> {
    let header = |name: HeaderName| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    Json(json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "authorization": header(AUTHORIZATION),
        "contentType": header(CONTENT_TYPE),
        "cookie": header(COOKIE),
        "body": String::from_utf8_lossy(&body),
    }))
}

async fn rejected_login() -> (StatusCode, Json<Value>) {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid credentials" })))
}

async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

async fn spawn_upstream() -> SocketAddr {
    serve(
        Router::new()
            .route("/api/auth/login", post(rejected_login))
            .route("/api/auth/profile/avatar", delete(no_content))
            .route("/api/{*path}", any(echo)),
    )
    .await
}

async fn spawn_host(upstream: &str) -> SocketAddr {
    let timeouts = UpstreamTimeouts { request_secs: 5, connect_secs: 1 };
    serve(api_routes(AppState::new(upstream, timeouts).unwrap())).await
}

#[tokio::test]
async fn forwards_method_path_query_and_authorization() {
    let upstream = spawn_upstream().await;
    let host = spawn_host(&format!("http://{upstream}")).await;

    let resp = reqwest::Client::new()
        .get(format!("http://{host}/api/auth/me?fresh=1"))
        .header(AUTHORIZATION, "Bearer abc")
        .header(COOKIE, "sid=secret")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["method"], "GET");
    assert_eq!(body["uri"], "/api/auth/me?fresh=1");
    assert_eq!(body["authorization"], "Bearer abc");
    assert_eq!(body["cookie"], Value::Null);
}

#[tokio::test]
async fn forwards_request_body_and_content_type() {
    let upstream = spawn_upstream().await;
    let host = spawn_host(&format!("http://{upstream}")).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{host}/api/auth/register"))
        .json(&json!({ "name": "Ada", "email": "a@b.com", "password": "secret1" }))
        .send()
        .await
        .unwrap();

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["contentType"], "application/json");
    let sent: Value = serde_json::from_str(body["body"].as_str().unwrap()).unwrap();
    assert_eq!(sent["email"], "a@b.com");
}

#[tokio::test]
async fn relays_upstream_error_status_and_body() {
    let upstream = spawn_upstream().await;
    let host = spawn_host(&format!("http://{upstream}")).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{host}/api/auth/login"))
        .json(&json!({ "email": "a@b.com", "password": "wrong" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn relays_status_without_content_type() {
    let upstream = spawn_upstream().await;
    let host = spawn_host(&format!("http://{upstream}")).await;

    let resp = reqwest::Client::new()
        .delete(format!("http://{host}/api/auth/profile/avatar"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.headers().get(CONTENT_TYPE).is_none());
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    // Bind then drop to get a port nothing listens on.
    let closed = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let host = spawn_host(&format!("http://{closed}")).await;

    let resp = reqwest::Client::new()
        .get(format!("http://{host}/api/auth/me"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": crate::error::UPSTREAM_UNAVAILABLE_MESSAGE }));
}

#[tokio::test]
async fn healthz_is_ok() {
    let host = spawn_host("http://127.0.0.1:9").await;
    let resp = reqwest::get(format!("http://{host}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
