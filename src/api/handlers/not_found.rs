//! Fallback handler for unmatched routes.

use crate::error::AppError;

/// Returns the `ROUTE_NOT_FOUND` envelope for any unmatched path.
pub async fn not_found_handler() -> AppError {
    AppError::RouteNotFound
}
