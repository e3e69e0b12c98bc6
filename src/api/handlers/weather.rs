//! Handler for the weather endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::weather::WeatherResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the normalized weather record for a city.
///
/// # Endpoint
///
/// `GET /api/weather/{city}`
///
/// # Responses
///
/// - **200**: `{date, temperature, condition, minTemperature,
///   maxTemperature, humidity, pressure}`
/// - **400 `INVALID_CITY`**: city failed validation
/// - **404 `CITY_NOT_FOUND` / `DATA_NOT_FOUND`**: upstream 404 or required
///   fields unresolved
/// - **503 / 504**: upstream unavailable, unparsable, or timed out
pub async fn weather_handler(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<WeatherResponse>, AppError> {
    let record = state.weather_service.get_weather(&city).await?;
    Ok(Json(WeatherResponse::from(record)))
}
