//! Application configuration loaded from environment variables.

use std::time::Duration;

use checkout::{CheckoutConfig, PartialFailurePolicy};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `3000`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT`: `text` or `json` (default: `text`)
/// - `CHECKOUT_REQUEST_TIMEOUT_MS`: per-sale timeout (default: none)
/// - `CHECKOUT_PARTIAL_FAILURE`: `keep` or `retain-failed` (default: `keep`)
/// - `SEED_CATALOG`: load the house catalog at startup (default: `true`)
///
/// Unparseable values fall back to the default.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub checkout_timeout: Option<Duration>,
    pub partial_failure: PartialFailurePolicy,
    pub seed_catalog: bool,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT")
                .and_then(|f| LogFormat::parse(&f))
                .unwrap_or(defaults.log_format),
            checkout_timeout: lookup("CHECKOUT_REQUEST_TIMEOUT_MS")
                .and_then(|ms| ms.trim().parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis),
            partial_failure: lookup("CHECKOUT_PARTIAL_FAILURE")
                .and_then(|p| PartialFailurePolicy::parse(&p))
                .unwrap_or(defaults.partial_failure),
            seed_catalog: lookup("SEED_CATALOG")
                .and_then(|s| parse_bool(&s))
                .unwrap_or(defaults.seed_catalog),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn checkout(&self) -> CheckoutConfig {
        CheckoutConfig {
            request_timeout: self.checkout_timeout,
            partial_failure: self.partial_failure,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            checkout_timeout: None,
            partial_failure: PartialFailurePolicy::KeepCart,
            seed_catalog: true,
        }
    }
}

fn parse_bool(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
