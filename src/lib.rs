//! # skycast
//!
//! A weather API service that scrapes third-party weather pages. The hard
//! part is not the HTTP plumbing but the resilient extraction pipeline:
//! untrusted, frequently-changing markup; selector-based extraction with
//! fallbacks; numeric normalization with sanity bounds; retry/backoff
//! against a flaky upstream; and a selector health monitor that alerts an
//! operator when the upstream's markup drifts.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - The weather record entity and gateway
//!   traits (`PageSource`, `AlertSink`)
//! - **Application Layer** ([`application`]) - Fetch policy, extraction
//!   orchestration, and the selector health monitor
//! - **Extraction** ([`extraction`]) - Pure selector resolution and field
//!   parsing
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest client and
//!   alert delivery
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables (see .env.example)
//! export SCRAPE_API_FIRST="https://weather.example.com/"
//! export SCRAPE_API_LAST="-weather-forecast-today"
//! export SCRAPE_API_FALLBACK="https://backup.example.com/weather/"
//! export TEMPERATURE_CLASS=".wtr_tmp_rhs"
//! # ... remaining selector classes ...
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod extraction;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        FetchService, SelectorMonitor, SourceUrls, WeatherService,
    };
    pub use crate::domain::entities::WeatherRecord;
    pub use crate::domain::gateways::{AlertSink, PageSource, SourceError};
    pub use crate::error::AppError;
    pub use crate::extraction::{Field, SelectorConfig, SelectorSettings};
    pub use crate::state::AppState;
}
