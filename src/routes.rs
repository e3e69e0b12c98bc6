//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /api/weather/{city}` - Extraction pipeline (strict rate limit)
//! - `GET /api/version`        - Service version
//! - `GET /config`             - Frontend settings
//! - anything else             - 404 `ROUTE_NOT_FOUND` envelope
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on the weather path
//! - **CORS** - Origin allow list with a `CORS_DENIED` envelope on rejection

use std::sync::Arc;

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::{Router, extract::Request, middleware, middleware::Next};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origins` - CORS origin allow list; cross-origin requests
///   from anywhere else receive 403 `CORS_DENIED`
pub fn app_router(state: AppState, allowed_origins: Vec<String>) -> Router {
    let origins = Arc::new(allowed_origins);

    Router::new()
        .merge(api::routes::routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(move |request: Request, next: Next| {
            let origins = origins.clone();
            async move { cors::enforce(origins, request, next).await }
        }))
        .layer(tracing::layer())
}
