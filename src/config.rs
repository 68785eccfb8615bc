//! Service configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"
//! export LOG_FORMAT="json"
//! export INCLUDE_FUZZED_DEFAULT="true"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `INCLUDE_FUZZED_DEFAULT` - Include the fuzzed batch when a request does
//!   not say (default: `false`)
//! - `MAX_CLASSIFY_BATCH` - Maximum candidates per classify request
//!   (default: 1000)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Fuzz toggle applied to requests that leave `include_fuzzed` unset.
    pub include_fuzzed_default: bool,
    /// Upper bound on the number of candidates accepted by `POST /api/classify`.
    pub max_classify_batch: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            include_fuzzed_default: false,
            max_classify_batch: 1000,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let include_fuzzed_default = env::var("INCLUDE_FUZZED_DEFAULT")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.include_fuzzed_default);

        let max_classify_batch = env::var("MAX_CLASSIFY_BATCH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_classify_batch);

        Self {
            listen_addr,
            log_level,
            log_format,
            include_fuzzed_default,
            max_classify_batch,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `max_classify_batch` is outside `1..=100000`
    pub fn validate(&self) -> Result<()> {
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

        if self.max_classify_batch == 0 || self.max_classify_batch > 100_000 {
            anyhow::bail!(
                "MAX_CLASSIFY_BATCH must be between 1 and 100000, got {}",
                self.max_classify_batch
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Include fuzzed by default: {}", self.include_fuzzed_default);
        tracing::info!("  Max classify batch: {}", self.max_classify_batch);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
