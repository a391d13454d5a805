//! Logging utilities
//!
//! Subscriber setup for binaries and helpers that keep request logs short

use crate::config::settings::LoggingConfig;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use tracing::info;

/// Maximum length of a single query value in debug logs
pub const MAX_LOGGED_VALUE_LEN: usize = 64;

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len).collect();
        format!("{}... ({} chars truncated)", kept, s.chars().count() - max_len)
    } else {
        s.to_string()
    }
}

/// Create a filtered summary of query arguments for logging
pub fn query_log_summary<'a, I>(args: I) -> String
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let sorted: BTreeMap<&String, &String> = args.into_iter().collect();
    sorted
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, truncate_content(v, MAX_LOGGED_VALUE_LEN)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Initialize the global tracing subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if config.format == "json" {
        // JSON format logs (production environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format (development environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Logging system initialized");
    Ok(())
}
