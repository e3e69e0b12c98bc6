//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::WeatherService;

/// Settings passed through to the browser frontend via `GET /config`.
#[derive(Debug, Clone)]
pub struct FrontendSettings {
    pub recent_search_limit: u32,
    pub api_url: Option<String>,
}

/// Read-only state shared by all handlers.
///
/// Nothing here is mutated after startup, so concurrent requests share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<WeatherService>,
    pub frontend: FrontendSettings,
}

impl AppState {
    pub fn new(weather_service: Arc<WeatherService>, frontend: FrontendSettings) -> Self {
        Self {
            weather_service,
            frontend,
        }
    }
}
