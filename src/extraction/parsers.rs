//! Field parsers: raw extracted text to normalized, bounds-checked values.
//!
//! Every parser accepts possibly-absent input and degrades to the
//! [`NOT_AVAILABLE`] sentinel instead of failing; malformed upstream text
//! must never take a request down.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

pub use crate::domain::entities::weather::NOT_AVAILABLE;

/// Sanity bounds for any Celsius reading.
const TEMP_MIN_C: f64 = -100.0;
const TEMP_MAX_C: f64 = 100.0;

/// Sanity bounds for pressure in hPa.
const PRESSURE_MIN_HPA: f64 = 300.0;
const PRESSURE_MAX_HPA: f64 = 1100.0;

/// Signed decimal immediately followed by a degree-Celsius marker.
static CELSIUS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(-?\d+(?:\.\d+)?)\s*°\s*c").unwrap());

/// Any degree-marked signed decimal (min/max blobs omit the C).
static DEGREE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-?\d+(?:\.\d+)?)\s*°").unwrap());

static HUMIDITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*%?\s*humidity").unwrap());

static PRESSURE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*pressure").unwrap());

/// Date formats the upstream has been observed to use.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%B %d, %Y", "%d %B %Y", "%m/%d/%Y"];

/// Parses the current temperature from raw text.
///
/// Accepts the first degree-Celsius-marked number within sanity bounds
/// and renders it to one decimal place with the unit suffix; anything
/// else degrades to the sentinel.
pub fn parse_temperature(raw: Option<&str>) -> String {
    let Some(text) = raw else {
        return NOT_AVAILABLE.to_string();
    };

    CELSIUS_PATTERN
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .filter(|t| (TEMP_MIN_C..=TEMP_MAX_C).contains(t))
        .map(|t| format!("{t:.1} °C"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Extracts the `index`-th degree-marked number from a text blob.
///
/// Pure helper behind the positional min/max convention; independently
/// testable as "the Nth match of a numeric pattern".
fn nth_degree_value(text: &str, index: usize) -> Option<f64> {
    DEGREE_PATTERN
        .captures_iter(text)
        .nth(index)
        .and_then(|caps| caps[1].parse::<f64>().ok())
}

/// Parses minimum and maximum temperature from one combined blob.
///
/// The first degree-marked number is taken as the minimum and the second
/// as the maximum. This positional convention is inherited from the source
/// markup's layout; if the upstream ever swaps the order, min and max
/// silently transpose. Each value is bounds-checked independently and a
/// missing one degrades to the sentinel.
pub fn parse_min_max_temperature(raw: Option<&str>) -> (String, String) {
    let Some(text) = raw else {
        return (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string());
    };

    let render = |value: Option<f64>| {
        value
            .filter(|t| (TEMP_MIN_C..=TEMP_MAX_C).contains(t))
            .map(|t| format!("{t:.1} °C"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };

    (
        render(nth_degree_value(text, 0)),
        render(nth_degree_value(text, 1)),
    )
}

/// Parses humidity and pressure from one combined, field-labelled blob.
///
/// Humidity is truncated to a whole percentage and accepted in [0, 100];
/// pressure is accepted in [300, 1100] hPa. Each degrades to the sentinel
/// independently.
pub fn parse_humidity_pressure(raw: Option<&str>) -> (String, String) {
    let Some(text) = raw else {
        return (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string());
    };

    let humidity = HUMIDITY_PATTERN
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .map(|h| h.trunc() as i64)
        .filter(|h| (0..=100).contains(h))
        .map(|h| format!("{h}%"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let pressure = PRESSURE_PATTERN
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .filter(|p| (PRESSURE_MIN_HPA..=PRESSURE_MAX_HPA).contains(p))
        .map(|p| format!("{p:.1} hPa"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    (humidity, pressure)
}

/// Formats a raw date string as a long-form human date ("Month Day, Year").
///
/// Date is display-only: when no known format matches, the raw string is
/// returned unchanged rather than replaced with the sentinel.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}
