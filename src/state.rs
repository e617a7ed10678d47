//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the parsed config and one pooled `reqwest::Client` reused by every
//! proxied request.

use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state with an HTTP client bounded by the configured proxy timeout.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the TLS backend cannot be initialised.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.proxy_timeout).build()?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
