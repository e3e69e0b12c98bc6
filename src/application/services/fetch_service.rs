//! Source fetcher: retry with linear backoff, then a fallback source.

use std::sync::Arc;
use std::time::Duration;

use tokio_retry::Retry;

use crate::domain::gateways::{PageSource, SourceError};

/// URL templates for the primary and fallback sources.
///
/// The primary URL is `primary_prefix + city_key + primary_suffix`;
/// the fallback URL is `fallback_prefix + city_key`.
#[derive(Debug, Clone)]
pub struct SourceUrls {
    pub primary_prefix: String,
    pub primary_suffix: String,
    pub fallback_prefix: String,
}

impl SourceUrls {
    fn primary(&self, city_key: &str) -> String {
        format!("{}{}{}", self.primary_prefix, city_key, self.primary_suffix)
    }

    fn fallback(&self, city_key: &str) -> String {
        format!("{}{}", self.fallback_prefix, city_key)
    }
}

/// Retrieves raw markup for a normalized city key.
///
/// The primary source is attempted up to `retries` times with linear
/// backoff (`backoff * attempt`); on exhaustion the fallback source gets
/// its own identical retry loop. Retries are sequential, never fanned out.
/// No markup is cached.
pub struct FetchService {
    source: Arc<dyn PageSource>,
    urls: SourceUrls,
    retries: usize,
    backoff: Duration,
}

impl FetchService {
    pub fn new(
        source: Arc<dyn PageSource>,
        urls: SourceUrls,
        retries: usize,
        backoff: Duration,
    ) -> Self {
        Self {
            source,
            urls,
            retries,
            backoff,
        }
    }

    /// Fetches markup for `city_key`, trying primary then fallback.
    ///
    /// # Errors
    ///
    /// When both sources exhaust their retries, returns the fallback's
    /// final [`SourceError`] with its cause intact (timeout vs not-found
    /// vs other), so the caller can map it without re-inspecting transport
    /// internals.
    pub async fn fetch(&self, city_key: &str) -> Result<String, SourceError> {
        let primary_url = self.urls.primary(city_key);

        match self.fetch_with_retry(&primary_url).await {
            Ok(markup) => Ok(markup),
            Err(primary_err) => {
                tracing::warn!(
                    error = %primary_err,
                    "Primary source failed, trying fallback"
                );

                let fallback_url = self.urls.fallback(city_key);
                self.fetch_with_retry(&fallback_url).await.inspect_err(|e| {
                    tracing::error!(error = %e, "Fallback source also failed");
                })
            }
        }
    }

    async fn fetch_with_retry(&self, url: &str) -> Result<String, SourceError> {
        Retry::spawn(linear_backoff(self.backoff, self.retries), || {
            self.source.get(url)
        })
        .await
    }
}

/// Waits of `base * 1`, `base * 2`, ... between attempts; `retries` total
/// attempts means `retries - 1` waits.
fn linear_backoff(base: Duration, retries: usize) -> impl Iterator<Item = Duration> {
    (1..retries as u32).map(move |attempt| base * attempt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockPageSource;

    const PAGE: &str = "<html><body>weather</body></html>";

    fn urls() -> SourceUrls {
        SourceUrls {
            primary_prefix: "https://weather.example.com/".to_string(),
            primary_suffix: "-weather-forecast-today".to_string(),
            fallback_prefix: "https://backup.example.com/weather/".to_string(),
        }
    }

    fn service(source: MockPageSource, retries: usize) -> FetchService {
        FetchService::new(
            Arc::new(source),
            urls(),
            retries,
            Duration::from_millis(1),
        )
    }

    #[test]
    fn test_linear_backoff_schedule() {
        let waits: Vec<_> = linear_backoff(Duration::from_millis(300), 3).collect();
        assert_eq!(
            waits,
            vec![Duration::from_millis(300), Duration::from_millis(600)]
        );
    }

    #[tokio::test]
    async fn test_primary_succeeds_first_attempt() {
        let mut source = MockPageSource::new();
        source
            .expect_get()
            .withf(|url| url == "https://weather.example.com/london-weather-forecast-today")
            .times(1)
            .returning(|_| Ok(PAGE.to_string()));

        let result = service(source, 3).fetch("london").await;
        assert_eq!(result.unwrap(), PAGE);
    }

    #[tokio::test]
    async fn test_primary_exhausts_then_fallback_succeeds() {
        let mut source = MockPageSource::new();
        source
            .expect_get()
            .withf(|url| url.starts_with("https://weather.example.com/"))
            .times(3)
            .returning(|_| Err(SourceError::Transport("connection reset".to_string())));
        source
            .expect_get()
            .withf(|url| url == "https://backup.example.com/weather/london")
            .times(1)
            .returning(|_| Ok(PAGE.to_string()));

        // Exactly 3 primary attempts plus 1 fallback attempt.
        let result = service(source, 3).fetch("london").await;
        assert_eq!(result.unwrap(), PAGE);
    }

    #[tokio::test]
    async fn test_both_sources_exhaust_keeps_fallback_error() {
        let mut source = MockPageSource::new();
        source
            .expect_get()
            .withf(|url| url.starts_with("https://weather.example.com/"))
            .times(2)
            .returning(|_| Err(SourceError::Transport("reset".to_string())));
        source
            .expect_get()
            .withf(|url| url.starts_with("https://backup.example.com/"))
            .times(2)
            .returning(|_| Err(SourceError::Status(404)));

        let err = service(source, 2).fetch("london").await.unwrap_err();
        assert_eq!(err, SourceError::Status(404));
    }

    #[tokio::test]
    async fn test_timeout_cause_survives_retries() {
        let mut source = MockPageSource::new();
        source
            .expect_get()
            .times(4)
            .returning(|_| Err(SourceError::Timeout));

        let err = service(source, 2).fetch("paris").await.unwrap_err();
        assert_eq!(err, SourceError::Timeout);
    }
}
