//! Gateway trait for operator alerting.

use async_trait::async_trait;

/// Sentinel reported when the probe fetch itself failed, so no individual
/// selector could be checked.
pub const ALL_SELECTORS_FAILED: &str = "ALL_SELECTORS_FAILED";

/// Destination for selector-drift alerts raised by the health monitor.
///
/// The transport behind the sink (email, chat, pager) is an external
/// collaborator; the shipped implementation logs.
///
/// # Implementations
///
/// - [`crate::infrastructure::alerting::LogAlertSink`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Delivers one alert naming the logical fields whose selectors failed.
    ///
    /// Invoked at most once per monitor cycle. Delivery failures must be
    /// absorbed by the implementation; the monitor never retries.
    async fn notify(&self, failed_fields: &[String]);
}
