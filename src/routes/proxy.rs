//! `/api/v1` reverse proxy to the calculation backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this origin. Every `/api/v1/*` request is
//! replayed against `BACKEND_URL` with the same method, path, query, body and
//! end-to-end headers; the backend's status, headers and body come back
//! unchanged so the client's interceptors see exactly what the backend said.
//!
//! TRADE-OFFS
//! ==========
//! Bodies are buffered rather than streamed. Every payload on this API is a
//! small JSON document, and buffering keeps the error mapping in one place.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Duration;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Path prefix shared by the browser client and the backend.
pub const API_PREFIX: &str = "/api/v1";

/// Headers that describe a single connection and must not cross the proxy.
fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend could not be reached or dropped the connection.
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// The backend did not answer within the proxy timeout.
    #[error("backend did not respond within {0}s")]
    Timeout(u64),
}

impl ProxyError {
    fn from_reqwest(err: &reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout.as_secs())
        } else {
            Self::Unreachable(err.to_string())
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Text for the `message` field, shown to the user as-is by the client.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Unreachable(_) => "后端服务不可用",
            Self::Timeout(_) => "后端服务响应超时",
        }
    }

    /// Machine-readable code placed in the `error` field of the body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unreachable(_) => "bad_gateway",
            Self::Timeout(_) => "gateway_timeout",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.code(), "message": self.user_message() });
        (self.status(), Json(body)).into_response()
    }
}

/// Absolute backend URL for an incoming request URI.
///
/// The incoming path already carries the `/api/v1` prefix, so it is appended
/// to the backend origin as-is, query string included.
pub fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", backend_url.trim_end_matches('/'))
}

/// Copy end-to-end headers, dropping hop-by-hop ones plus `Host` and
/// `Content-Length`, which the outgoing side recomputes.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|&(name, _)| *name != header::HOST && *name != header::CONTENT_LENGTH && !is_hop_by_hop(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Forward one request to the backend and relay its response.
///
/// # Errors
///
/// Returns [`ProxyError`] when the backend is unreachable or too slow. Any
/// HTTP response from the backend, error statuses included, is relayed.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.backend_url, &uri);
    let timeout = state.config.proxy_timeout;
    tracing::debug!(%method, %url, "proxying api request");

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwardable_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| ProxyError::from_reqwest(&e, timeout))
        .inspect_err(|e| tracing::warn!(%method, %url, error = %e, "backend request failed"))?;

    let status = upstream.status();
    let response_headers = forwardable_headers(upstream.headers());
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| ProxyError::from_reqwest(&e, timeout))
        .inspect_err(|e| tracing::warn!(%method, %url, error = %e, "backend body read failed"))?;

    if status.is_server_error() {
        tracing::warn!(%method, %url, %status, "backend returned server error");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
