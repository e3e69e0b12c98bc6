//! Central error type mapped 1:1 to the JSON error envelope.
//!
//! Every error response is `{error, code, statusCode, timestamp, details?}`
//! with a human-readable message and a machine-readable code. Upstream
//! transport errors are logged, never echoed to clients.

use axum::{
    Json,
    http::{StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    code: &'static str,
    #[serde(rename = "statusCode")]
    status_code: u16,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

/// Application error taxonomy.
///
/// Only the source fetcher and the orchestrator's required-field check
/// produce these; field parsers and the selector resolver degrade to
/// sentinel values instead of erroring.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// The supplied city name failed validation (400).
    InvalidCity,
    /// Upstream answered with a 404-shaped response (404).
    CityNotFound,
    /// Markup was fetched but a required field never resolved (404).
    DataNotFound,
    /// All fetch attempts exceeded the timeout (504).
    Timeout,
    /// Markup was fetched but could not be interpreted at all (503).
    Parsing { details: Option<Value> },
    /// Both sources exhausted their retries for non-timeout reasons (503).
    Unavailable,
    /// The admission gate rejected the request (429).
    RateLimited { retry_after_secs: u64 },
    /// The request's Origin is not on the allow list (403).
    CorsDenied,
    /// No route matched the request path (404).
    RouteNotFound,
    /// Any uncategorized failure (500).
    Internal,
}

impl AppError {
    pub fn parsing(details: Option<Value>) -> Self {
        Self::Parsing { details }
    }

    pub fn rate_limited(retry_after_secs: u64) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCity => StatusCode::BAD_REQUEST,
            Self::CityNotFound | Self::DataNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Parsing { .. } | Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::CorsDenied => StatusCode::FORBIDDEN,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCity => "INVALID_CITY",
            Self::CityNotFound => "CITY_NOT_FOUND",
            Self::DataNotFound => "DATA_NOT_FOUND",
            Self::Timeout => "TIMEOUT",
            Self::Parsing { .. } => "PARSING_ERROR",
            Self::Unavailable => "SERVICE_UNAVAILABLE",
            Self::RateLimited { .. } => "RATE_LIMIT_EXCEEDED",
            Self::CorsDenied => "CORS_DENIED",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::Internal => "SERVER_ERROR",
        }
    }

    /// Human-readable message for the response body.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidCity => {
                "Invalid city name. Use letters, spaces, apostrophes (') and hyphens (-)"
            }
            Self::CityNotFound => "City not found. Please check the spelling.",
            Self::DataNotFound => "Weather data not found for the specified city.",
            Self::Timeout => "The weather service is taking too long. Try again later.",
            Self::Parsing { .. } => {
                "Unable to parse weather data. The weather service might be temporarily unavailable."
            }
            Self::Unavailable => "Weather service temporarily unavailable.",
            Self::RateLimited { .. } => {
                "Too many requests to the weather API. Please try again later."
            }
            Self::CorsDenied => "CORS policy disallows access from this origin.",
            Self::RouteNotFound => "Route not found.",
            Self::Internal => "Unexpected server error. Please try again later.",
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            Self::Parsing { details } => details.clone(),
            Self::RateLimited { retry_after_secs } => {
                Some(json!({ "retryAfter": format!("{retry_after_secs} seconds") }))
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = ErrorBody {
            error: self.message(),
            code: self.code(),
            status_code: status.as_u16(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            details: self.details(),
        };

        let mut response = (status, Json(body)).into_response();

        if let Self::RateLimited { retry_after_secs } = self
            && let Ok(value) = retry_after_secs.to_string().parse()
        {
            response.headers_mut().insert(RETRY_AFTER, value);
        }

        response
    }
}
