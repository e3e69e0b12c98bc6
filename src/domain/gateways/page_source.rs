//! Gateway trait for retrieving raw markup from an upstream URL.

use async_trait::async_trait;

/// Transport-level failure of a single fetch attempt.
///
/// The cause is preserved so callers can map it to a response without
/// re-inspecting transport internals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("request timed out")]
    Timeout,

    #[error("upstream responded with status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),
}

impl SourceError {
    /// Whether the upstream answered with a 404-shaped response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(404))
    }
}

/// Gateway for fetching one page of raw markup.
///
/// One call is one HTTP GET; retry and fallback policy live in
/// [`crate::application::services::FetchService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpPageSource`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the raw markup at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Timeout`] when the request exceeds the
    /// configured timeout, [`SourceError::Status`] for non-success HTTP
    /// statuses, and [`SourceError::Transport`] for everything else.
    async fn get(&self, url: &str) -> Result<String, SourceError>;
}
