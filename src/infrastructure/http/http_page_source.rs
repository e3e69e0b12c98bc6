//! reqwest-backed page source.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::gateways::{PageSource, SourceError};

/// Realistic browser identification; upstream sites may reject
/// unidentified clients.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP implementation of [`PageSource`].
///
/// One call is one GET with a bounded timeout; an attempt that exceeds it
/// is abandoned and surfaces as [`SourceError::Timeout`].
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    /// Builds the source with a fixed per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn get(&self, url: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        response.text().await.map_err(classify_reqwest_error)
    }
}

fn classify_reqwest_error(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        SourceError::Timeout
    } else {
        SourceError::Transport(err.to_string())
    }
}
