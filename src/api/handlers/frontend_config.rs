//! Handler for the frontend configuration endpoint.

use axum::{Json, extract::State};

use crate::api::dto::frontend_config::FrontendConfigResponse;
use crate::state::AppState;

/// Returns the settings the browser frontend reads at startup.
///
/// # Endpoint
///
/// `GET /config`
pub async fn frontend_config_handler(State(state): State<AppState>) -> Json<FrontendConfigResponse> {
    Json(FrontendConfigResponse {
        recent_search_limit: state.frontend.recent_search_limit,
        api_url: state.frontend.api_url.clone(),
    })
}
