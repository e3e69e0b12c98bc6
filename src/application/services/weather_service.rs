//! Extraction orchestrator: validate, normalize, fetch, resolve, parse,
//! assemble.

use std::sync::Arc;

use scraper::Html;
use serde_json::json;

use crate::application::services::FetchService;
use crate::domain::entities::WeatherRecord;
use crate::domain::entities::weather::NOT_AVAILABLE;
use crate::domain::gateways::SourceError;
use crate::error::AppError;
use crate::extraction::parsers::{
    format_date, parse_humidity_pressure, parse_min_max_temperature, parse_temperature,
};
use crate::extraction::{Field, SelectorConfig};
use crate::utils::city_normalizer::{is_valid_city, normalize_city_key};

/// Composes the selector resolver and field parsers over fetched markup
/// into a normalized weather record.
pub struct WeatherService {
    fetcher: FetchService,
    selectors: Arc<SelectorConfig>,
}

impl WeatherService {
    pub fn new(fetcher: FetchService, selectors: Arc<SelectorConfig>) -> Self {
        Self { fetcher, selectors }
    }

    /// Runs the full pipeline for one city query.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidCity`] when the query fails validation; no
    ///   network call is made.
    /// - [`AppError::Timeout`] / [`AppError::CityNotFound`] /
    ///   [`AppError::Unavailable`] per the fetch outcome.
    /// - [`AppError::Parsing`] when the fetched document is blank.
    /// - [`AppError::DataNotFound`] when raw temperature or condition text
    ///   never resolved from the markup.
    pub async fn get_weather(&self, raw_city: &str) -> Result<WeatherRecord, AppError> {
        let city = raw_city.trim();
        if !is_valid_city(city) {
            return Err(AppError::InvalidCity);
        }

        let city_key = normalize_city_key(city);
        tracing::debug!(%city_key, "Fetching weather markup");

        let markup = self
            .fetcher
            .fetch(&city_key)
            .await
            .map_err(map_source_error)?;

        extract_record(&markup, &self.selectors)
    }
}

fn map_source_error(err: SourceError) -> AppError {
    match err {
        SourceError::Timeout => AppError::Timeout,
        e if e.is_not_found() => AppError::CityNotFound,
        e => {
            tracing::error!(error = %e, "Upstream fetch failed");
            AppError::Unavailable
        }
    }
}

/// Resolves and parses all fields from raw markup.
///
/// Synchronous on purpose: the parsed document is not `Send` and must
/// never live across an await point.
fn extract_record(markup: &str, selectors: &SelectorConfig) -> Result<WeatherRecord, AppError> {
    if markup.trim().is_empty() {
        return Err(AppError::parsing(Some(json!({
            "reason": "upstream returned an empty document"
        }))));
    }

    let document = Html::parse_document(markup);

    let temperature_raw = selectors.resolve(Field::Temperature, &document);
    let condition = selectors.resolve(Field::Condition, &document);

    // A record without raw temperature or condition text is a miss, not a
    // partially empty success.
    let (Some(temperature_raw), Some(condition)) = (temperature_raw, condition) else {
        return Err(AppError::DataNotFound);
    };

    let (min_temperature, max_temperature) = parse_min_max_temperature(
        selectors
            .resolve(Field::MinMaxTemperature, &document)
            .as_deref(),
    );
    let (humidity, pressure) = parse_humidity_pressure(
        selectors
            .resolve(Field::HumidityPressure, &document)
            .as_deref(),
    );
    let date = selectors
        .resolve(Field::Date, &document)
        .map(|raw| format_date(&raw))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    Ok(WeatherRecord {
        date,
        temperature: parse_temperature(Some(&temperature_raw)),
        condition,
        min_temperature,
        max_temperature,
        humidity,
        pressure,
    })
}
