//! Selector health monitor.
//!
//! Probes the primary source for a known-good reference city on a fixed
//! interval (plus once at startup) and alerts the operator when configured
//! selectors stop matching, before the API starts returning bad data.
//! Runs on its own task and never touches the request path.

use std::sync::Arc;
use std::time::Duration;

use scraper::Html;

use crate::domain::gateways::alert_sink::ALL_SELECTORS_FAILED;
use crate::domain::gateways::{AlertSink, PageSource};
use crate::extraction::{Field, SelectorConfig};

pub struct SelectorMonitor {
    source: Arc<dyn PageSource>,
    selectors: Arc<SelectorConfig>,
    alert: Arc<dyn AlertSink>,
    /// Primary-source URL for the reference city; probed without retries
    /// or fallback.
    probe_url: String,
    interval: Duration,
}

impl SelectorMonitor {
    pub fn new(
        source: Arc<dyn PageSource>,
        selectors: Arc<SelectorConfig>,
        alert: Arc<dyn AlertSink>,
        probe_url: String,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            selectors,
            alert,
            probe_url,
            interval,
        }
    }

    /// Runs the monitor loop forever. The first probe fires immediately.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);

        loop {
            ticker.tick().await;
            self.check_once().await;
        }
    }

    /// One probe cycle: a single fetch, a selector sweep, and at most one
    /// alert.
    pub async fn check_once(&self) {
        match self.source.get(&self.probe_url).await {
            Ok(markup) => {
                let failed = probe_selectors(&markup, &self.selectors);

                if failed.is_empty() {
                    tracing::info!("All selectors validated successfully");
                } else {
                    tracing::warn!(fields = ?failed, "Selector validation failed");
                    self.alert.notify(&failed).await;
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Selector probe fetch failed");
                self.alert.notify(&[ALL_SELECTORS_FAILED.to_string()]).await;
            }
        }
    }
}

/// Sweeps every configured field's probe pattern over the reference
/// document, returning the names of the fields that no longer match.
fn probe_selectors(markup: &str, selectors: &SelectorConfig) -> Vec<String> {
    let document = Html::parse_document(markup);

    Field::ALL
        .into_iter()
        .filter(|field| !selectors.probe(*field, &document))
        .map(|field| field.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::{MockAlertSink, MockPageSource, SourceError};
    use crate::extraction::SelectorSettings;

    const ALL_FALLBACKS_PAGE: &str = r#"
        <div class="temp-fallback">22.5 °C</div>
        <div class="min-max-temp-fallback">18° / 27°</div>
        <div class="humidity-pressure-fallback">60% Humidity 1015 Pressure</div>
        <div class="condition-fallback">Sunny</div>
        <div class="date-fallback">2024-03-05</div>
    "#;

    const MISSING_CONDITION_PAGE: &str = r#"
        <div class="temp-fallback">22.5 °C</div>
        <div class="min-max-temp-fallback">18° / 27°</div>
        <div class="humidity-pressure-fallback">60% Humidity 1015 Pressure</div>
        <div class="date-fallback">2024-03-05</div>
    "#;

    fn selectors() -> Arc<SelectorConfig> {
        Arc::new(
            SelectorConfig::from_settings(&SelectorSettings {
                temperature: ".wtr_tmp_rhs".to_string(),
                min_max_temperature: ".wtr_tmp_min_max".to_string(),
                humidity_pressure: ".wtr_wind_prssr".to_string(),
                condition: ".wtr_tmp_txt".to_string(),
                date: ".wtr_dt".to_string(),
            })
            .unwrap(),
        )
    }

    fn monitor(source: MockPageSource, alert: MockAlertSink) -> SelectorMonitor {
        SelectorMonitor::new(
            Arc::new(source),
            selectors(),
            Arc::new(alert),
            "https://weather.example.com/delhi-weather-forecast-today".to_string(),
            Duration::from_secs(60 * 60 * 24),
        )
    }

    #[tokio::test]
    async fn test_healthy_probe_sends_no_alert() {
        let mut source = MockPageSource::new();
        source
            .expect_get()
            .times(1)
            .returning(|_| Ok(ALL_FALLBACKS_PAGE.to_string()));

        let mut alert = MockAlertSink::new();
        alert.expect_notify().times(0);

        monitor(source, alert).check_once().await;
    }

    #[tokio::test]
    async fn test_missing_selector_alerts_once_with_field_name() {
        let mut source = MockPageSource::new();
        source
            .expect_get()
            .times(1)
            .returning(|_| Ok(MISSING_CONDITION_PAGE.to_string()));

        let mut alert = MockAlertSink::new();
        alert
            .expect_notify()
            .withf(|failed| failed == ["condition".to_string()])
            .times(1)
            .returning(|_| ());

        monitor(source, alert).check_once().await;
    }

    #[tokio::test]
    async fn test_probe_fetch_failure_alerts_sentinel() {
        let mut source = MockPageSource::new();
        source
            .expect_get()
            .times(1)
            .returning(|_| Err(SourceError::Timeout));

        let mut alert = MockAlertSink::new();
        alert
            .expect_notify()
            .withf(|failed| failed == [ALL_SELECTORS_FAILED.to_string()])
            .times(1)
            .returning(|_| ());

        monitor(source, alert).check_once().await;
    }

    #[test]
    fn test_probe_selectors_reports_every_missing_field() {
        let failed = probe_selectors("<p>drifted markup</p>", &selectors());
        assert_eq!(
            failed,
            vec![
                "temperature",
                "minMaxTemperature",
                "humidityPressure",
                "condition",
                "date"
            ]
        );
    }
}
