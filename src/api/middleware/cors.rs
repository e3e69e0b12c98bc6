//! Origin allow-list enforcement.
//!
//! A request without an `Origin` header passes untouched. An allow-listed
//! origin is echoed back in the response headers; anything else receives
//! the `CORS_DENIED` envelope instead of a silently header-less response.

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{
        HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN, VARY,
        },
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

pub async fn enforce(allowed_origins: Arc<Vec<String>>, request: Request, next: Next) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let Some(origin) = origin else {
        // Same-origin and non-browser clients carry no Origin header.
        return next.run(request).await;
    };

    if !allowed_origins.iter().any(|allowed| *allowed == origin) {
        return AppError::CorsDenied.into_response();
    }

    let Ok(origin_value) = HeaderValue::from_str(&origin) else {
        return AppError::CorsDenied.into_response();
    };

    let mut response = if request.method() == Method::OPTIONS {
        let mut preflight = StatusCode::NO_CONTENT.into_response();
        preflight
            .headers_mut()
            .insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET"));
        preflight.headers_mut().insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("content-type"),
        );
        preflight
    } else {
        next.run(request).await
    };

    response
        .headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin_value);
    response
        .headers_mut()
        .insert(VARY, HeaderValue::from_static("Origin"));

    response
}
