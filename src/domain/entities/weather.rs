//! Normalized weather record entity.

use serde::Serialize;

/// Sentinel for any field that could not be confidently extracted
/// or that failed its sanity bounds.
pub const NOT_AVAILABLE: &str = "N/A";

/// The normalized output of one extraction run.
///
/// Each field is either a normalized value string or [`NOT_AVAILABLE`].
/// A record only exists when raw temperature and condition text were
/// resolved from the markup; the orchestrator fails with `DATA_NOT_FOUND`
/// otherwise. Constructed once per successful request, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub date: String,
    pub temperature: String,
    pub condition: String,
    pub min_temperature: String,
    pub max_temperature: String,
    pub humidity: String,
    pub pressure: String,
}

impl WeatherRecord {
    /// Whether every field carries a real value rather than the sentinel.
    pub fn is_complete(&self) -> bool {
        [
            &self.date,
            &self.temperature,
            &self.condition,
            &self.min_temperature,
            &self.max_temperature,
            &self.humidity,
            &self.pressure,
        ]
        .iter()
        .all(|field| field.as_str() != NOT_AVAILABLE)
    }
}
