use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use filmes_api::modules::movie::memory::InMemoryMovieRepository;
use filmes_api::state::AppState;

/// Build the full application router over a fresh in-memory store.
pub async fn build_test_app() -> Router {
    let state = AppState::new(Arc::new(InMemoryMovieRepository::new()));
    filmes_api::app::create_app(state).await
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed JSON body. Empty bodies are `Value::Null`; plain-text bodies
    /// (health check, extractor rejections) are `Value::String`.
    pub json: Value,
}

/// Send one request through the router with an `application/json` body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    send_as(app, method, uri, "application/json", body).await
}

/// Like [`send`], with an explicit `Content-Type`.
pub async fn send_as(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: &str,
    body: Option<Value>,
) -> TestResponse {
    let body = match body {
        Some(json) => Body::from(json.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse {
        status,
        headers,
        json,
    }
}
