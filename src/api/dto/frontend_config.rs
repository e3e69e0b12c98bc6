//! DTO for the frontend configuration endpoint.

use serde::Serialize;

/// Settings the browser frontend reads at startup. Key names are part of
/// the wire contract.
#[derive(Debug, Serialize)]
pub struct FrontendConfigResponse {
    #[serde(rename = "RECENT_SEARCH_LIMIT")]
    pub recent_search_limit: u32,

    #[serde(rename = "API_URL", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}
