//! REST call-sites for the OnceHuman tools backend, grouped by namespace.
//!
//! Each function is a thin wrapper over the shared [`client`]: it names the
//! endpoint, picks the verb and the payload type, and nothing else. Failures
//! have already been toasted by the time the caller sees the `Err`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::client;

pub const HEALTH_PATH: &str = "/health";
pub const AFFIX_LIST_PATH: &str = "/mod/affix/list";
pub const AFFIX_PROBABILITY_PATH: &str = "/mod/affix/probability";
pub const STRENGTHEN_PROBABILITY_PATH: &str = "/mod/strengthen/probability";
pub const TOOLS_PATH: &str = "/tools";

/// System endpoints.
pub mod system {
    use super::{HEALTH_PATH, client};
    use crate::net::error::ApiError;
    use crate::net::types::HealthResponse;

    /// `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the backend is unreachable or unhealthy.
    pub async fn health_check() -> Result<HealthResponse, ApiError> {
        client().get(HEALTH_PATH).await
    }
}

/// Mod (affix and strengthen) endpoints.
pub mod mods {
    use super::{AFFIX_LIST_PATH, AFFIX_PROBABILITY_PATH, STRENGTHEN_PROBABILITY_PATH, client};
    use crate::net::error::ApiError;
    use crate::net::types::{
        AffixListResponse, AffixProbabilityRequest, AffixProbabilityResponse, StrengthenProbabilityRequest,
        StrengthenProbabilityResponse,
    };

    /// `GET /mod/affix/list`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any request failure.
    pub async fn get_affix_list() -> Result<AffixListResponse, ApiError> {
        client().get(AFFIX_LIST_PATH).await
    }

    /// `POST /mod/affix/probability`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`]; validation failures carry the backend message.
    pub async fn calculate_affix_probability(
        params: &AffixProbabilityRequest,
    ) -> Result<AffixProbabilityResponse, ApiError> {
        client().post(AFFIX_PROBABILITY_PATH, params).await
    }

    /// `POST /mod/strengthen/probability`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`]; validation failures carry the backend message.
    pub async fn calculate_strengthen_probability(
        params: &StrengthenProbabilityRequest,
    ) -> Result<StrengthenProbabilityResponse, ApiError> {
        client().post(STRENGTHEN_PROBABILITY_PATH, params).await
    }
}

/// Tool catalogue endpoints.
pub mod tools {
    use super::{TOOLS_PATH, client};
    use crate::net::error::ApiError;
    use crate::net::types::ToolsListResponse;

    /// `GET /tools`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any request failure.
    pub async fn get_tools_list() -> Result<ToolsListResponse, ApiError> {
        client().get(TOOLS_PATH).await
    }
}
