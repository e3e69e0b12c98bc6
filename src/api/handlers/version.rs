//! Handler for the version endpoint.

use axum::Json;

use crate::api::dto::version::VersionResponse;

/// Date of the last deployed API contract change.
const LAST_UPDATED: &str = "2025-07-14";

/// Returns the service version.
///
/// # Endpoint
///
/// `GET /api/version`
pub async fn version_handler() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
        last_updated: LAST_UPDATED,
    })
}
