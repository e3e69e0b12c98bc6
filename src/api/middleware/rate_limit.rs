//! Rate limiting middleware using token bucket algorithm.
//!
//! The limiter is the admission gate in front of the extraction pipeline;
//! the pipeline itself treats it as a black box. Rejections reply with the
//! service's JSON envelope rather than the library default.

use axum::response::{IntoResponse, Response};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer, governor::GovernorConfigBuilder,
    key_extractor::SmartIpKeyExtractor,
};

use crate::error::AppError;

/// Creates the default rate limiter for non-weather endpoints.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// # Key Extraction
///
/// Per client IP, read from `X-Forwarded-For` / `X-Real-IP` when present
/// and falling back to the socket peer address.
pub fn layer() -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(2)
            .burst_size(100)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf).error_handler(handle_rejection)
}

/// Creates the stricter rate limiter for the weather endpoint, which fans
/// out to the upstream on every miss.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 50 requests
pub fn weather_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(1)
            .burst_size(50)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf).error_handler(handle_rejection)
}

/// Maps limiter rejections to the JSON error envelope
/// (`RATE_LIMIT_EXCEEDED`, 429, `Retry-After`).
fn handle_rejection(err: GovernorError) -> Response {
    match err {
        GovernorError::TooManyRequests { wait_time, .. } => {
            AppError::rate_limited(wait_time).into_response()
        }
        _ => AppError::Internal.into_response(),
    }
}
