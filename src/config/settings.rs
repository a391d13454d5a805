//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use crate::constants::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Listen Notes API configuration
    pub api: ApiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Listen Notes API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API key; empty selects the sandbox endpoint
    #[serde(default, skip_serializing)]
    pub api_key: String,
    /// Base URL override
    pub base_url: Option<String>,
    /// Overall request timeout in seconds
    pub timeout: u64,
    /// Connect timeout in seconds
    pub connect_timeout: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Settings {
    /// Create a new configuration instance
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let base_url = std::env::var("LISTEN_API_BASE_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let settings = Self {
            api: ApiConfig {
                api_key: get_env_or_default("LISTEN_API_KEY", "").trim().to_string(),
                base_url,
                timeout: get_env_or_default("LISTEN_API_TIMEOUT", &DEFAULT_TIMEOUT_SECS.to_string())
                    .parse()
                    .context("Invalid timeout value")?,
                connect_timeout: get_env_or_default(
                    "LISTEN_API_CONNECT_TIMEOUT",
                    &DEFAULT_CONNECT_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid connect timeout value")?,
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        if self.api.api_key.contains(char::is_whitespace) {
            anyhow::bail!("Listen API key cannot contain whitespace characters");
        }

        // Validate URL format
        if let Some(base_url) = &self.api.base_url {
            if !base_url.starts_with("http") {
                anyhow::bail!("Invalid Listen API base URL format, should start with 'http'");
            }
        }

        // Validate timeout values
        if self.api.timeout == 0 || self.api.connect_timeout == 0 {
            anyhow::bail!("Timeout values cannot be 0");
        }

        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Whether requests will go to the sandbox endpoint
    pub fn uses_sandbox(&self) -> bool {
        self.api.api_key.is_empty() && self.api.base_url.is_none()
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
