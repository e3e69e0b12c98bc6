//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A missing required variable aborts startup.
//!
//! ## Required Variables
//!
//! - `SCRAPE_API_FIRST` / `SCRAPE_API_LAST` - primary source URL prefix/suffix
//! - `SCRAPE_API_FALLBACK` - fallback source URL prefix
//! - `TEMPERATURE_CLASS`, `MIN_MAX_TEMPERATURE_CLASS`,
//!   `HUMIDITY_PRESSURE_CLASS`, `CONDITION_CLASS`, `DATE_CLASS` -
//!   primary CSS selectors per logical field
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `FETCH_RETRIES` - Attempts per source (default: 3)
//! - `FETCH_BACKOFF_MS` - Linear backoff base in milliseconds (default: 300)
//! - `FETCH_TIMEOUT_MS` - Per-request timeout (default: 5000)
//! - `MONITOR_INTERVAL_HOURS` - Selector probe interval (default: 24)
//! - `MONITOR_REFERENCE_CITY` - Known-good probe city (default: `delhi`)
//! - `ADMIN_EMAIL` - Alert destination; absence only disables alerting
//! - `RECENT_SEARCH_LIMIT` / `API_URL` - passed through to the frontend
//! - `ALLOWED_ORIGIN`..`ALLOWED_ORIGIN4` - CORS origin allow list

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // ── Source URLs ─────────────────────────────────────────────────────────
    /// Primary source URL prefix, prepended to the normalized city key.
    pub scrape_api_first: String,
    /// Primary source URL suffix, appended after the normalized city key.
    pub scrape_api_last: String,
    /// Fallback source URL prefix (no suffix).
    pub scrape_api_fallback: String,

    // ── Selectors ───────────────────────────────────────────────────────────
    pub temperature_class: String,
    pub min_max_temperature_class: String,
    pub humidity_pressure_class: String,
    pub condition_class: String,
    pub date_class: String,

    // ── Fetch policy ────────────────────────────────────────────────────────
    /// Attempts per source before giving up (`FETCH_RETRIES`, default: 3).
    pub fetch_retries: usize,
    /// Linear backoff base in ms; attempt N waits `backoff * N`
    /// (`FETCH_BACKOFF_MS`, default: 300).
    pub fetch_backoff_ms: u64,
    /// Per-request timeout in ms (`FETCH_TIMEOUT_MS`, default: 5000).
    pub fetch_timeout_ms: u64,

    // ── Selector monitor ────────────────────────────────────────────────────
    /// Hours between selector health probes (`MONITOR_INTERVAL_HOURS`, default: 24).
    pub monitor_interval_hours: u64,
    /// Reference city used for the probe fetch (`MONITOR_REFERENCE_CITY`, default: `delhi`).
    pub monitor_reference_city: String,

    // ── Alerting ────────────────────────────────────────────────────────────
    /// Operator alert destination. `None` disables alert delivery but not startup.
    pub admin_email: Option<String>,

    // ── HTTP surface ────────────────────────────────────────────────────────
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// CORS origin allow list built from `ALLOWED_ORIGIN`..`ALLOWED_ORIGIN4`.
    pub allowed_origins: Vec<String>,

    // ── Frontend passthrough ────────────────────────────────────────────────
    pub recent_search_limit: u32,
    pub api_url: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required source URL or selector variable
    /// is missing.
    pub fn from_env() -> Result<Self> {
        let scrape_api_first = require("SCRAPE_API_FIRST")?;
        let scrape_api_last = require("SCRAPE_API_LAST")?;
        let scrape_api_fallback = require("SCRAPE_API_FALLBACK")?;

        let temperature_class = require("TEMPERATURE_CLASS")?;
        let min_max_temperature_class = require("MIN_MAX_TEMPERATURE_CLASS")?;
        let humidity_pressure_class = require("HUMIDITY_PRESSURE_CLASS")?;
        let condition_class = require("CONDITION_CLASS")?;
        let date_class = require("DATE_CLASS")?;

        let fetch_retries = parse_or("FETCH_RETRIES", 3);
        let fetch_backoff_ms = parse_or("FETCH_BACKOFF_MS", 300);
        let fetch_timeout_ms = parse_or("FETCH_TIMEOUT_MS", 5000);

        let monitor_interval_hours = parse_or("MONITOR_INTERVAL_HOURS", 24);
        let monitor_reference_city =
            env::var("MONITOR_REFERENCE_CITY").unwrap_or_else(|_| "delhi".to_string());

        let admin_email = env::var("ADMIN_EMAIL").ok().filter(|v| !v.is_empty());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let allowed_origins = load_allowed_origins();

        let recent_search_limit = parse_or("RECENT_SEARCH_LIMIT", 5);
        let api_url = env::var("API_URL").ok().filter(|v| !v.is_empty());

        Ok(Self {
            scrape_api_first,
            scrape_api_last,
            scrape_api_fallback,
            temperature_class,
            min_max_temperature_class,
            humidity_pressure_class,
            condition_class,
            date_class,
            fetch_retries,
            fetch_backoff_ms,
            fetch_timeout_ms,
            monitor_interval_hours,
            monitor_reference_city,
            admin_email,
            listen_addr,
            log_level,
            log_format,
            allowed_origins,
            recent_search_limit,
            api_url,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a source URL prefix is not HTTP(S)
    /// - a selector fails to parse as CSS
    /// - fetch policy or monitor values are out of range
    /// - `listen_addr` is not `host:port`
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("SCRAPE_API_FIRST", &self.scrape_api_first),
            ("SCRAPE_API_FALLBACK", &self.scrape_api_fallback),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                anyhow::bail!("{} must start with 'http://' or 'https://', got '{}'", name, value);
            }
        }

        for (name, value) in [
            ("TEMPERATURE_CLASS", &self.temperature_class),
            ("MIN_MAX_TEMPERATURE_CLASS", &self.min_max_temperature_class),
            ("HUMIDITY_PRESSURE_CLASS", &self.humidity_pressure_class),
            ("CONDITION_CLASS", &self.condition_class),
            ("DATE_CLASS", &self.date_class),
        ] {
            if scraper::Selector::parse(value).is_err() {
                anyhow::bail!("{} is not a valid CSS selector: '{}'", name, value);
            }
        }

        if self.fetch_retries == 0 || self.fetch_retries > 10 {
            anyhow::bail!(
                "FETCH_RETRIES must be between 1 and 10, got {}",
                self.fetch_retries
            );
        }

        if self.fetch_timeout_ms == 0 {
            anyhow::bail!("FETCH_TIMEOUT_MS must be greater than 0");
        }

        if self.monitor_interval_hours == 0 {
            anyhow::bail!("MONITOR_INTERVAL_HOURS must be greater than 0");
        }

        if self.monitor_reference_city.is_empty() {
            anyhow::bail!("MONITOR_REFERENCE_CITY must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Primary source: {}", self.scrape_api_first);
        tracing::info!("  Fallback source: {}", self.scrape_api_fallback);
        tracing::info!(
            "  Fetch policy: {} attempts, {} ms backoff, {} ms timeout",
            self.fetch_retries,
            self.fetch_backoff_ms,
            self.fetch_timeout_ms
        );
        tracing::info!(
            "  Selector monitor: every {} h, reference city '{}'",
            self.monitor_interval_hours,
            self.monitor_reference_city
        );

        if self.admin_email.is_some() {
            tracing::info!("  Operator alerts: enabled");
        } else {
            tracing::info!("  Operator alerts: disabled (ADMIN_EMAIL not set)");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("Missing environment variable {name}"))
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Collects the CORS allow list from `ALLOWED_ORIGIN` and
/// `ALLOWED_ORIGIN2`..`ALLOWED_ORIGIN4`, skipping unset or empty entries.
fn load_allowed_origins() -> Vec<String> {
    ["ALLOWED_ORIGIN", "ALLOWED_ORIGIN2", "ALLOWED_ORIGIN3", "ALLOWED_ORIGIN4"]
        .iter()
        .filter_map(|name| env::var(name).ok())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
