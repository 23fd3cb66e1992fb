//! Server-side `/api` reverse proxy
//!
//! The ticketing REST backend lives behind `BACKEND_API_URL`; the browser
//! only ever talks same-origin. This router forwards `/api/*` verbatim
//! (method, query, auth header, JSON body) and passes the backend's status
//! and body straight back.

use axum::{
    Router,
    body::{Body, Bytes},
    extract::{Path, RawQuery, State},
    http::{HeaderMap, Method, StatusCode},
    response::Response,
    routing::any,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::core::config::Config;

/// Proxy state: one shared client plus the backend base URL.
#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    backend_url: String,
}

/// Error response body for proxy-level failures.
#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    message: String,
    code: u16,
}

/// Create the `/api` proxy router.
pub fn proxy_router(config: &Config) -> Router {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.proxy_timeout_secs))
        .build()
        .expect("failed to build proxy HTTP client");

    let state = Arc::new(ProxyState {
        client,
        backend_url: config.backend_url_or_panic().trim_end_matches('/').to_string(),
    });

    Router::new()
        .route("/api/{*path}", any(proxy_handler))
        .with_state(state)
}

/// Forward one request to the backend and relay the response.
async fn proxy_handler(
    State(state): State<Arc<ProxyState>>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut target = format!("{}/{}", state.backend_url, path);
    if let Some(query) = query {
        target.push('?');
        target.push_str(&query);
    }

    let Ok(method) = reqwest::Method::from_bytes(method.as_str().as_bytes()) else {
        return error_response(StatusCode::METHOD_NOT_ALLOWED, "Unsupported method");
    };

    tracing::debug!("proxy: {} {}", method, target);

    let mut request = state.client.request(method, &target);
    for name in ["authorization", "content-type", "accept"] {
        if let Some(value) = headers.get(name).and_then(|value| value.to_str().ok()) {
            request = request.header(name, value);
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    match request.send().await {
        Ok(response) => {
            let status = StatusCode::from_u16(response.status().as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let content_type = response
                .headers()
                .get("content-type")
                .and_then(|value| value.to_str().ok())
                .unwrap_or("application/json")
                .to_string();

            match response.bytes().await {
                Ok(bytes) => Response::builder()
                    .status(status)
                    .header("Content-Type", content_type)
                    .body(Body::from(bytes))
                    .unwrap(),
                Err(e) => {
                    tracing::error!("proxy: failed to read backend response: {}", e);
                    error_response(
                        StatusCode::BAD_GATEWAY,
                        &format!("Failed to read backend response: {}", e),
                    )
                }
            }
        }
        Err(e) => {
            tracing::error!("proxy: failed to reach backend: {}", e);
            error_response(
                StatusCode::BAD_GATEWAY,
                &format!("Failed to reach backend: {}", e),
            )
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = ErrorResponse {
        error: ErrorDetail {
            message: message.to_string(),
            code: status.as_u16(),
        },
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(
            serde_json::to_string(&body).unwrap_or_default(),
        ))
        .unwrap()
}
