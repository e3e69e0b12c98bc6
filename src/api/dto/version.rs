//! DTO for the version endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,

    #[serde(rename = "lastUpdated")]
    pub last_updated: &'static str,
}
