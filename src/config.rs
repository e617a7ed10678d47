//! Server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `BACKEND_URL` is not an absolute http(s) URL.
    #[error("invalid BACKEND_URL '{0}': expected http:// or https://")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub backend_url: String,
    pub proxy_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            proxy_timeout: Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://127.0.0.1:8080`
    /// - `PROXY_TIMEOUT_SECS`: default 30
    ///
    /// Unparseable numbers fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBackendUrl`] when `BACKEND_URL` is set
    /// to something other than an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse("PORT", DEFAULT_PORT);
        let backend_url = parse_backend_url(std::env::var("BACKEND_URL").ok().as_deref())?;
        let timeout_secs = env_parse("PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS).max(1);

        Ok(Self { port, backend_url, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BACKEND_URL);
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidBackendUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
