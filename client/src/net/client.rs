//! Process-wide HTTP client with request/response interceptors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every call-site in `net::api` goes through the single [`HttpClient`]
//! returned by [`client`]. A call runs as:
//!
//! `build_request` -> [`intercept_request`] -> transport -> [`intercept_response`]
//!
//! The response interceptor is the only place failures are surfaced: each
//! one is pushed to the global toast queue and then returned to the caller,
//! so views can still react locally (re-enable a button, clear a spinner).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, aborted after the
//! client timeout. Server-side (SSR) and native tests: the transport always
//! fails with a network error since these endpoints are browser-only.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::LazyLock;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::types::ErrorResponse;
use crate::state::toast;

/// Path prefix for every backend endpoint.
pub const API_BASE_URL: &str = "/api/v1";

/// Client-level timeout applied to every request.
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Keys that mark a response body as a wrapper around a `data` payload.
const ENVELOPE_KEYS: &[&str] = &["data", "message", "code", "success"];

/// HTTP verbs used by the call-sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Fully resolved outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestConfig {
    pub method: Method,
    /// Absolute path including [`API_BASE_URL`].
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Pre-encoded JSON body.
    pub body: Option<String>,
    pub timeout_ms: u32,
}

impl RequestConfig {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw HTTP response before unwrapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseEnvelope {
    pub status: u16,
    pub body: String,
}

impl ResponseEnvelope {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Pre-configured HTTP client. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpClient {
    base_url: String,
    timeout_ms: u32,
    headers: Vec<(String, String)>,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(API_BASE_URL, REQUEST_TIMEOUT_MS)
    }
}

impl HttpClient {
    /// Build a client that sends JSON to `base_url`.
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            timeout_ms,
            headers: vec![("Content-Type".to_owned(), JSON_CONTENT_TYPE.to_owned())],
        }
    }

    /// Join an endpoint path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Resolve a request against this client's defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if `body` cannot be encoded as JSON.
    pub fn build_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<RequestConfig, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(RequestConfig {
            method,
            url: self.url(path),
            headers: self.headers.clone(),
            body,
            timeout_ms: self.timeout_ms,
        })
    }

    /// `GET {base}{path}` and decode the unwrapped payload.
    ///
    /// # Errors
    ///
    /// Any failure, already surfaced as an error toast.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.build_request::<()>(Method::Get, path, None)).await
    }

    /// `POST {base}{path}` with a JSON body and decode the unwrapped payload.
    ///
    /// # Errors
    ///
    /// Any failure, already surfaced as an error toast.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.build_request(Method::Post, path, Some(body))).await
    }

    async fn execute<T: DeserializeOwned>(&self, config: Result<RequestConfig, ApiError>) -> Result<T, ApiError> {
        let outcome = match intercept_request(config) {
            Ok(config) => send(&config).await,
            Err(err) => Err(err),
        };
        intercept_response(outcome)
    }
}

/// The shared client used by all call-sites.
pub fn client() -> &'static HttpClient {
    static CLIENT: LazyLock<HttpClient> = LazyLock::new(HttpClient::default);
    &CLIENT
}

/// Outgoing hook. Currently a pass-through; auth headers would be added here.
///
/// # Errors
///
/// Re-raises a request that already failed to build, after logging it.
pub fn intercept_request(config: Result<RequestConfig, ApiError>) -> Result<RequestConfig, ApiError> {
    config
        .inspect(|config| {
            log::debug!(
                "{} {} ({})",
                config.method.as_str(),
                config.url,
                config.header("content-type").unwrap_or("no content-type")
            );
        })
        .inspect_err(|err| log::error!("request error: {err}"))
}

/// Incoming hook: unwrap success to its payload, toast and re-raise failures.
///
/// # Errors
///
/// Returns the transport error, a [`ApiError::Status`] for non-2xx answers,
/// or [`ApiError::Decode`] when the payload does not fit `T`.
pub fn intercept_response<T: DeserializeOwned>(outcome: Result<ResponseEnvelope, ApiError>) -> Result<T, ApiError> {
    let result = outcome.and_then(|envelope| {
        if envelope.is_success() {
            decode_payload(&envelope.body)
        } else {
            Err(ApiError::Status { status: envelope.status, message: extract_message(&envelope.body) })
        }
    });
    if let Err(err) = &result {
        match err.status() {
            Some(status) => log::warn!("api call failed with status {status}: {err}"),
            None => log::warn!("api call failed: {err}"),
        }
        toast::error(err.display_message());
    }
    result
}

/// Pull the `message` string out of an error body, verbatim. An empty string
/// counts as absent.
pub fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|err| err.message)
        .filter(|message| !message.is_empty())
}

/// Strip a `{ "data": ... }` wrapper; any other value is already the payload.
pub fn unwrap_payload(value: Value) -> Value {
    match value {
        Value::Object(mut map)
            if map.contains_key("data") && map.keys().all(|key| ENVELOPE_KEYS.contains(&key.as_str())) =>
        {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn decode_payload<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?
    };
    serde_json::from_value(unwrap_payload(value)).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send(config: &RequestConfig) -> Result<ResponseEnvelope, ApiError> {
    use gloo_net::http::RequestBuilder;

    let controller = web_sys::AbortController::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
    let signal = controller.signal();
    // Dropping the timer before it fires cancels it.
    let timer = gloo_timers::callback::Timeout::new(config.timeout_ms, move || controller.abort());

    let method = match config.method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
    };
    let mut builder = RequestBuilder::new(&config.url)
        .method(method)
        .abort_signal(Some(&signal));
    for (name, value) in &config.headers {
        builder = builder.header(name, value);
    }
    let request = match &config.body {
        Some(body) => builder.body(body.clone()),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Request(e.to_string()))?;

    let response = request.send().await;
    drop(timer);
    let response = response.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(ResponseEnvelope { status, body })
}

#[cfg(not(feature = "hydrate"))]
async fn send(config: &RequestConfig) -> Result<ResponseEnvelope, ApiError> {
    let _ = config;
    Err(ApiError::Network("not available on server".to_owned()))
}
