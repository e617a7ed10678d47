//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON contract (camelCase field names) so
//! serde round-trips stay lossless. Optional fields default when absent since
//! the backend omits empty collections.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Number of affix slots on a mod; strengthen requests carry one level per slot.
pub const MOD_SLOT_COUNT: usize = 4;

/// Response of `GET /health`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Backend status string (`"ok"` when healthy).
    pub status: String,
    /// Server time as an RFC 3339 string.
    pub timestamp: String,
    /// Backend version, if reported.
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// A single affix definition from the backend's affix pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affix {
    /// Affix number, 1-based.
    pub id: u32,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Grouping such as `"damage"`, `"defense"`, `"utility"`.
    #[serde(default)]
    pub category: Option<String>,
}

/// Response of `GET /mod/affix/list`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffixListResponse {
    pub affixes: Vec<Affix>,
    #[serde(default)]
    pub total: u32,
}

/// Body of `POST /mod/affix/probability`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffixProbabilityRequest {
    /// Number of affixes rolled onto the mod.
    pub slot_count: u32,
    /// Affix ids that count as a hit.
    pub target_affix_ids: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_combinations: Option<bool>,
}

/// Result of an affix probability calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffixProbabilityResponse {
    /// Probability in `[0, 1]`.
    pub probability: f64,
    /// Same probability scaled to `[0, 100]`.
    pub probability_percent: f64,
    pub total_combinations: u64,
    pub valid_combinations: u64,
    #[serde(default)]
    pub slot_count: u32,
    /// Deduplicated, sorted target ids the backend actually used.
    #[serde(default)]
    pub target_range: Vec<u32>,
    /// Every qualifying combination, when requested and small enough.
    #[serde(default)]
    pub combinations: Vec<Vec<u32>>,
}

/// Body of `POST /mod/strengthen/probability`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthenProbabilityRequest {
    pub initial_levels: Vec<u8>,
    pub target_levels: Vec<u8>,
    /// When `true`, any slot may satisfy any target level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_independent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_paths: Option<bool>,
}

/// Result of a strengthen probability calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthenProbabilityResponse {
    pub probability: f64,
    pub probability_percent: f64,
    pub successful_outcomes: u64,
    pub total_outcomes: u64,
    #[serde(default)]
    pub paths: Vec<StrengthenPath>,
}

/// One enumerated enhancement sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthenPath {
    pub success: bool,
    pub final_levels: Vec<u8>,
    #[serde(default)]
    pub steps: Vec<StrengthenStep>,
}

/// A single enhancement roll within a [`StrengthenPath`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthenStep {
    /// 1-based roll number.
    pub step: u32,
    /// 0-based slot that was upgraded.
    pub slot: u32,
    pub new_level: u8,
}

/// A tool entry from `GET /tools`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Route slug, e.g. `"affix-probability"`.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Tool {
    /// Client route for this tool.
    pub fn href(&self) -> String {
        format!("/tools/{}", self.id)
    }
}

/// Response of `GET /tools`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsListResponse {
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable code such as `"bad_request"`.
    #[serde(default)]
    pub error: Option<String>,
    /// Human-readable message shown to the user.
    #[serde(default)]
    pub message: Option<String>,
}
