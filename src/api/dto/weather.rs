//! DTO for the weather endpoint.

use serde::Serialize;

use crate::domain::entities::WeatherRecord;

/// Seven-field weather document returned to clients.
///
/// Field names are part of the wire contract consumed by the frontend.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    pub date: String,
    pub temperature: String,
    pub condition: String,
    pub min_temperature: String,
    pub max_temperature: String,
    pub humidity: String,
    pub pressure: String,
}

impl From<WeatherRecord> for WeatherResponse {
    fn from(record: WeatherRecord) -> Self {
        Self {
            date: record.date,
            temperature: record.temperature,
            condition: record.condition,
            min_temperature: record.min_temperature,
            max_temperature: record.max_temperature,
            humidity: record.humidity,
            pressure: record.pressure,
        }
    }
}
