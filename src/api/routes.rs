//! API route configuration.

use crate::api::handlers::{frontend_config_handler, version_handler, weather_handler};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes with their admission gates.
///
/// # Endpoints
///
/// - `GET /api/weather/{city}` - Normalized weather record (strict limiter)
/// - `GET /api/version`        - Service version
/// - `GET /config`             - Frontend settings
pub fn routes() -> Router<AppState> {
    let weather = Router::new()
        .route("/api/weather/{city}", get(weather_handler))
        .layer(rate_limit::weather_layer());

    let meta = Router::new()
        .route("/api/version", get(version_handler))
        .route("/config", get(frontend_config_handler))
        .layer(rate_limit::layer());

    Router::new().merge(weather).merge(meta)
}
