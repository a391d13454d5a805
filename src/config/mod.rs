//! Configuration management module
//!
//! Loads client configuration from environment variables and `.env` files

pub mod settings;

pub use settings::{ApiConfig, LoggingConfig, Settings};
