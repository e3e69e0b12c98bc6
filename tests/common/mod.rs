#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use skycast::prelude::*;
use skycast::state::FrontendSettings;

/// Markup shaped like the upstream weather page, matching the primary
/// selectors used in tests.
pub const FULL_PAGE: &str = r#"
    <html><body>
        <div class="wtr_dt">2024-03-05</div>
        <div class="wtr_tmp_rhs">22.5 °C</div>
        <div class="wtr_tmp_txt">Sunny</div>
        <div class="wtr_tmp_min_max">18° / 27°</div>
        <div class="wtr_wind_prssr">60% Humidity 1015 Pressure</div>
    </body></html>
"#;

/// Markup missing the condition element under both primary and fallback
/// selectors.
pub const NO_CONDITION_PAGE: &str = r#"
    <html><body>
        <div class="wtr_tmp_rhs">22.5 °C</div>
    </body></html>
"#;

/// Canned page source that records how many fetches were attempted.
pub struct StubPageSource {
    response: Result<String, SourceError>,
    calls: Arc<AtomicUsize>,
}

impl StubPageSource {
    pub fn ok(body: &str) -> (Arc<Self>, Arc<AtomicUsize>) {
        Self::with_response(Ok(body.to_string()))
    }

    pub fn err(error: SourceError) -> (Arc<Self>, Arc<AtomicUsize>) {
        Self::with_response(Err(error))
    }

    fn with_response(response: Result<String, SourceError>) -> (Arc<Self>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = Arc::new(Self {
            response,
            calls: calls.clone(),
        });
        (source, calls)
    }
}

#[async_trait]
impl PageSource for StubPageSource {
    async fn get(&self, _url: &str) -> Result<String, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

pub fn selector_settings() -> SelectorSettings {
    SelectorSettings {
        temperature: ".wtr_tmp_rhs".to_string(),
        min_max_temperature: ".wtr_tmp_min_max".to_string(),
        humidity_pressure: ".wtr_wind_prssr".to_string(),
        condition: ".wtr_tmp_txt".to_string(),
        date: ".wtr_dt".to_string(),
    }
}

pub fn source_urls() -> SourceUrls {
    SourceUrls {
        primary_prefix: "https://weather.example.com/".to_string(),
        primary_suffix: "-weather-forecast-today".to_string(),
        fallback_prefix: "https://backup.example.com/weather/".to_string(),
    }
}

pub fn create_test_state(source: Arc<dyn PageSource>) -> AppState {
    let selectors = Arc::new(SelectorConfig::from_settings(&selector_settings()).unwrap());
    let fetcher = FetchService::new(source, source_urls(), 1, Duration::from_millis(1));
    let weather_service = Arc::new(WeatherService::new(fetcher, selectors));

    AppState::new(
        weather_service,
        FrontendSettings {
            recent_search_limit: 5,
            api_url: Some("http://localhost:5000".to_string()),
        },
    )
}
