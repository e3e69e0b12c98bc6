//! HTTP server initialization and runtime setup.
//!
//! Wires the upstream client, extraction services, selector monitor and
//! Axum server lifecycle.

use crate::application::services::{FetchService, SelectorMonitor, SourceUrls, WeatherService};
use crate::config::Config;
use crate::domain::gateways::{AlertSink, PageSource};
use crate::extraction::{SelectorConfig, SelectorSettings};
use crate::infrastructure::alerting::LogAlertSink;
use crate::infrastructure::http::HttpPageSource;
use crate::routes::app_router;
use crate::state::{AppState, FrontendSettings};
use crate::utils::city_normalizer::normalize_city_key;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Upstream HTTP client (shared by requests and the monitor)
/// - Selector configuration (parsed once, immutable afterwards)
/// - Background selector health monitor
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be constructed
/// - A configured selector fails to parse
/// - Server bind fails or a runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let source: Arc<dyn PageSource> = Arc::new(HttpPageSource::new(Duration::from_millis(
        config.fetch_timeout_ms,
    ))?);

    let selectors = Arc::new(SelectorConfig::from_settings(&SelectorSettings {
        temperature: config.temperature_class.clone(),
        min_max_temperature: config.min_max_temperature_class.clone(),
        humidity_pressure: config.humidity_pressure_class.clone(),
        condition: config.condition_class.clone(),
        date: config.date_class.clone(),
    })?);

    let urls = SourceUrls {
        primary_prefix: config.scrape_api_first.clone(),
        primary_suffix: config.scrape_api_last.clone(),
        fallback_prefix: config.scrape_api_fallback.clone(),
    };

    let fetcher = FetchService::new(
        source.clone(),
        urls.clone(),
        config.fetch_retries,
        Duration::from_millis(config.fetch_backoff_ms),
    );
    let weather_service = Arc::new(WeatherService::new(fetcher, selectors.clone()));

    let alert: Arc<dyn AlertSink> = Arc::new(LogAlertSink::new(config.admin_email.clone()));
    let probe_url = format!(
        "{}{}{}",
        urls.primary_prefix,
        normalize_city_key(&config.monitor_reference_city),
        urls.primary_suffix
    );
    let monitor = SelectorMonitor::new(
        source,
        selectors,
        alert,
        probe_url,
        Duration::from_secs(config.monitor_interval_hours * 60 * 60),
    );
    tokio::spawn(monitor.run());
    tracing::info!("Selector monitor started");

    let state = AppState::new(
        weather_service,
        FrontendSettings {
            recent_search_limit: config.recent_search_limit,
            api_url: config.api_url.clone(),
        },
    );

    let app = app_router(state, config.allowed_origins.clone());
    let app = NormalizePathLayer::trim_trailing_slash().layer(app);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
