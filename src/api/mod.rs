//! HTTP API layer: DTOs, handlers, middleware and route composition.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
