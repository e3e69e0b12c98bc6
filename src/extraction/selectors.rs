//! Selector configuration and resolution with fallback.
//!
//! Each logical field carries an ordered candidate list of CSS selectors:
//! the configured primary first, then a fixed fallback class. Resolution
//! walks the list and never errors; absence is a normal outcome the
//! orchestrator handles explicitly. The list form keeps the contract
//! unchanged if a third tier is ever added.

use scraper::{Html, Selector};

/// Logical fields extracted from the upstream markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Temperature,
    MinMaxTemperature,
    HumidityPressure,
    Condition,
    Date,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Temperature,
        Field::MinMaxTemperature,
        Field::HumidityPressure,
        Field::Condition,
        Field::Date,
    ];

    /// Logical name used in health reports and alerts.
    pub fn name(self) -> &'static str {
        match self {
            Field::Temperature => "temperature",
            Field::MinMaxTemperature => "minMaxTemperature",
            Field::HumidityPressure => "humidityPressure",
            Field::Condition => "condition",
            Field::Date => "date",
        }
    }

    /// Fixed fallback selector tried when the configured primary matches
    /// nothing. Also used by the health monitor as its probe pattern.
    fn fallback_selector(self) -> &'static str {
        match self {
            Field::Temperature => ".temp-fallback",
            Field::MinMaxTemperature => ".min-max-temp-fallback",
            Field::HumidityPressure => ".humidity-pressure-fallback",
            Field::Condition => ".condition-fallback",
            Field::Date => ".date-fallback",
        }
    }
}

/// Raw primary selector strings, one per logical field.
#[derive(Debug, Clone)]
pub struct SelectorSettings {
    pub temperature: String,
    pub min_max_temperature: String,
    pub humidity_pressure: String,
    pub condition: String,
    pub date: String,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid CSS selector for field '{field}': '{selector}'")]
pub struct SelectorConfigError {
    pub field: &'static str,
    pub selector: String,
}

#[derive(Debug)]
struct FieldSelectors {
    field: Field,
    /// Ordered candidates: primary first, fallback second.
    candidates: [Selector; 2],
}

/// Process-wide selector configuration.
///
/// Built once at startup from validated settings and shared read-only by
/// the request path and the health monitor. A selector change requires a
/// restart.
#[derive(Debug)]
pub struct SelectorConfig {
    entries: Vec<FieldSelectors>,
}

impl SelectorConfig {
    /// Parses the configured primary selectors and the built-in fallbacks.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorConfigError`] naming the offending field when a
    /// primary selector is not valid CSS.
    pub fn from_settings(settings: &SelectorSettings) -> Result<Self, SelectorConfigError> {
        let primaries = [
            (Field::Temperature, &settings.temperature),
            (Field::MinMaxTemperature, &settings.min_max_temperature),
            (Field::HumidityPressure, &settings.humidity_pressure),
            (Field::Condition, &settings.condition),
            (Field::Date, &settings.date),
        ];

        let mut entries = Vec::with_capacity(primaries.len());
        for (field, primary) in primaries {
            let primary = Selector::parse(primary).map_err(|_| SelectorConfigError {
                field: field.name(),
                selector: primary.clone(),
            })?;
            // Fallback selectors are compile-time constants.
            let fallback = Selector::parse(field.fallback_selector())
                .expect("built-in fallback selector is valid");

            entries.push(FieldSelectors {
                field,
                candidates: [primary, fallback],
            });
        }

        Ok(Self { entries })
    }

    /// Resolves the trimmed text for `field` from `document`.
    ///
    /// The first candidate selector matching at least one element wins.
    /// A matching element with empty text, or no matching candidate at
    /// all, yields `None`; this function never errors.
    pub fn resolve(&self, field: Field, document: &Html) -> Option<String> {
        let entry = self.entry(field);

        for candidate in &entry.candidates {
            if let Some(element) = document.select(candidate).next() {
                let text = element.text().collect::<String>();
                let text = text.trim();
                return (!text.is_empty()).then(|| text.to_string());
            }
        }

        None
    }

    /// Health-monitor probe: whether the field's fallback selector matches
    /// at least one element in `document`. The fallback doubles as the
    /// probe pattern since it is fixed while primaries are configurable.
    pub fn probe(&self, field: Field, document: &Html) -> bool {
        let entry = self.entry(field);
        document.select(&entry.candidates[1]).next().is_some()
    }

    fn entry(&self, field: Field) -> &FieldSelectors {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .expect("every logical field has a selector entry")
    }
}
