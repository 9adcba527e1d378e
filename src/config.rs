//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export BASE_URL="https://sho.rt"
//! export LISTEN="0.0.0.0:8080"
//! ```
//!
//! ## Optional Variables
//!
//! - `BASE_URL` - Prefix of generated short URLs (default: `http://localhost:8080`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `METRICS_TOP_N` - Domains reported by `/api/metrics` (default: 3, range: 1-100)

use anyhow::Result;
use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
const DEFAULT_METRICS_TOP_N: usize = 3;
const MAX_METRICS_TOP_N: usize = 100;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix for generated short URLs, without trailing slash.
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub metrics_top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            listen_addr: DEFAULT_LISTEN.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            metrics_top_n: DEFAULT_METRICS_TOP_N,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables fall back to their defaults; values that fail to
    /// parse are left for [`Config::validate`] to report where possible.
    ///
    /// # Errors
    ///
    /// Returns an error if `METRICS_TOP_N` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let metrics_top_n = match env::var("METRICS_TOP_N") {
            Ok(v) => v.trim().parse().map_err(|_| {
                anyhow::anyhow!("METRICS_TOP_N must be a positive integer, got '{}'", v)
            })?,
            Err(_) => DEFAULT_METRICS_TOP_N,
        };

        Ok(Self {
            base_url,
            listen_addr,
            log_level,
            log_format,
            metrics_top_n,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is not an absolute `http://` or `https://` URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `metrics_top_n` is outside 1-100
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("BASE_URL is not a valid URL: {}", e))?;

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

        if self.metrics_top_n == 0 || self.metrics_top_n > MAX_METRICS_TOP_N {
            anyhow::bail!(
                "METRICS_TOP_N must be between 1 and {}, got {}",
                MAX_METRICS_TOP_N,
                self.metrics_top_n
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Metrics top N: {}", self.metrics_top_n);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable fails to parse or validation fails.
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
