//! Application services composing the extraction pipeline.

pub mod fetch_service;
pub mod monitor_service;
pub mod weather_service;

pub use fetch_service::{FetchService, SourceUrls};
pub use monitor_service::SelectorMonitor;
pub use weather_service::WeatherService;
