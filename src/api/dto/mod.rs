//! Data Transfer Objects for API responses.

pub mod frontend_config;
pub mod version;
pub mod weather;
