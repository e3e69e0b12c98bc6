//! HTTP request handlers for API endpoints.

pub mod frontend_config;
pub mod not_found;
pub mod version;
pub mod weather;

pub use frontend_config::frontend_config_handler;
pub use not_found::not_found_handler;
pub use version::version_handler;
pub use weather::weather_handler;
