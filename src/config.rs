//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (loaded in `main.rs`).
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public prefix of short links (default: `http://localhost:3000/`)
//! - `STORE_PATH` - JSON file holding the links (default: `links.json`);
//!   `:memory:` keeps links in process memory only
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_LENGTH` - Length of generated short codes (default: 7, range 4-32)
//! - `MAX_GENERATION_ATTEMPTS` - Collision retries before giving up (default: 10)
//! - `REUSE_EXPIRED_CODES` - Let new links claim codes of expired ones (default: false)

use anyhow::Result;
use std::env;
use std::sync::Arc;

use crate::application::services::StoreSettings;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{JsonFileLinkRepository, MemoryLinkRepository};

/// `STORE_PATH` value selecting the in-memory repository.
pub const MEMORY_STORE: &str = ":memory:";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub store_path: String,
    pub log_level: String,
    pub log_format: String,
    pub code_length: usize,
    pub max_generation_attempts: usize,
    pub reuse_expired_codes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "http://localhost:3000/".to_string(),
            store_path: "links.json".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            code_length: 7,
            max_generation_attempts: 10,
            reuse_expired_codes: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_env_with_log_default("info")
    }

    /// Like [`Config::from_env`], but uses `log_level` when `RUST_LOG` is unset.
    ///
    /// The admin CLI starts at `warn` so its table output is not interleaved
    /// with store events.
    pub fn from_env_with_log_default(log_level: &str) -> Self {
        let defaults = Self {
            log_level: log_level.to_string(),
            ..Self::default()
        };

        Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            base_url: env::var("BASE_URL").unwrap_or(defaults.base_url),
            store_path: env::var("STORE_PATH").unwrap_or(defaults.store_path),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            code_length: parse_var("CODE_LENGTH").unwrap_or(defaults.code_length),
            max_generation_attempts: parse_var("MAX_GENERATION_ATTEMPTS")
                .unwrap_or(defaults.max_generation_attempts),
            reuse_expired_codes: env::var("REUSE_EXPIRED_CODES")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(defaults.reuse_expired_codes),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an absolute HTTP(S) URL
    /// - `code_length` is outside 4-32
    /// - `max_generation_attempts` is outside 1-1000
    /// - `store_path` is empty
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

        match url::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            _ => anyhow::bail!(
                "BASE_URL must be an absolute http(s) URL, got '{}'",
                self.base_url
            ),
        }

        if !(4..=32).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between 4 and 32, got {}",
                self.code_length
            );
        }

        if !(1..=1000).contains(&self.max_generation_attempts) {
            anyhow::bail!(
                "MAX_GENERATION_ATTEMPTS must be between 1 and 1000, got {}",
                self.max_generation_attempts
            );
        }

        if self.store_path.trim().is_empty() {
            anyhow::bail!("STORE_PATH must not be empty");
        }

        Ok(())
    }

    /// Returns whether links are kept in memory only.
    pub fn is_memory_store(&self) -> bool {
        self.store_path == MEMORY_STORE
    }

    /// Builds the repository selected by `STORE_PATH`.
    pub fn repository(&self) -> Arc<dyn LinkRepository> {
        if self.is_memory_store() {
            Arc::new(MemoryLinkRepository::new())
        } else {
            Arc::new(JsonFileLinkRepository::new(&self.store_path))
        }
    }

    /// Link store policy derived from this configuration.
    pub fn store_settings(&self) -> StoreSettings {
        let mut settings = StoreSettings::new(self.base_url.clone());
        settings.code_length = self.code_length;
        settings.max_generation_attempts = self.max_generation_attempts;
        settings.reuse_expired_codes = self.reuse_expired_codes;
        settings
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        if self.is_memory_store() {
            tracing::warn!("  Store: in-memory (links are lost on restart)");
        } else {
            tracing::info!("  Store: {}", self.store_path);
        }
        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!("  Reuse expired codes: {}", self.reuse_expired_codes);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
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
