//! HTTP middleware for request processing and protection.
//!
//! Provides the admission gate (rate limiting), CORS enforcement, and
//! observability middleware.

pub mod cors;
pub mod rate_limit;
pub mod tracing;
