//! Configuration module tests

use podcast_api::config::settings::{ApiConfig, LoggingConfig, Settings};
use podcast_api::constants::{BASE_URL_PRODUCTION, BASE_URL_TEST};
use podcast_api::PodcastClient;
use std::env;

const VARS: [&str; 6] = [
    "LISTEN_API_KEY",
    "LISTEN_API_BASE_URL",
    "LISTEN_API_TIMEOUT",
    "LISTEN_API_CONNECT_TIMEOUT",
    "RUST_LOG",
    "LOG_FORMAT",
];

/// Clean up test environment variables
fn cleanup_test_env() {
    for var in &VARS {
        env::remove_var(var);
    }
}

// Environment variables are process-global, so every env-driven case runs in
// this one test to keep them from racing each other.
#[test]
fn test_settings_from_env() {
    cleanup_test_env();

    // Defaults
    let settings = Settings::new().expect("defaults should load");
    assert_eq!(settings.api.api_key, "");
    assert_eq!(settings.api.base_url, None);
    assert_eq!(settings.api.timeout, 30);
    assert_eq!(settings.api.connect_timeout, 10);
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.logging.format, "text");
    assert!(settings.uses_sandbox());
    assert_eq!(PodcastClient::from_settings(&settings).unwrap().base_url(), BASE_URL_TEST);

    // API key selects production
    env::set_var("LISTEN_API_KEY", "  abc123  ");
    let settings = Settings::new().unwrap();
    assert_eq!(settings.api.api_key, "abc123");
    assert!(!settings.uses_sandbox());
    assert_eq!(PodcastClient::from_settings(&settings).unwrap().base_url(), BASE_URL_PRODUCTION);

    // Base URL override wins over the key-based default
    env::set_var("LISTEN_API_BASE_URL", "http://localhost:9000/api/v2");
    env::set_var("LISTEN_API_TIMEOUT", "5");
    env::set_var("LISTEN_API_CONNECT_TIMEOUT", "2");
    env::set_var("LOG_FORMAT", "json");
    let settings = Settings::new().unwrap();
    assert_eq!(settings.api.timeout, 5);
    assert_eq!(settings.api.connect_timeout, 2);
    assert_eq!(settings.logging.format, "json");
    assert_eq!(
        PodcastClient::from_settings(&settings).unwrap().base_url(),
        "http://localhost:9000/api/v2"
    );

    // Blank base URL is treated as unset
    env::set_var("LISTEN_API_BASE_URL", "   ");
    assert_eq!(Settings::new().unwrap().api.base_url, None);

    // Invalid values
    env::set_var("LISTEN_API_TIMEOUT", "soon");
    let err = Settings::new().unwrap_err();
    assert!(err.to_string().contains("Invalid timeout value"));
    env::set_var("LISTEN_API_TIMEOUT", "0");
    assert!(Settings::new().unwrap_err().to_string().contains("cannot be 0"));
    env::remove_var("LISTEN_API_TIMEOUT");

    env::set_var("LISTEN_API_BASE_URL", "listen-api.listennotes.com");
    assert!(Settings::new().unwrap_err().to_string().contains("should start with 'http'"));
    env::remove_var("LISTEN_API_BASE_URL");

    env::set_var("RUST_LOG", "verbose");
    assert!(Settings::new().unwrap_err().to_string().contains("Invalid log level"));

    cleanup_test_env();
}

#[test]
fn test_settings_validation_without_env() {
    let settings = Settings {
        api: ApiConfig {
            api_key: "key".to_string(),
            base_url: Some("https://listen-api-test.listennotes.com/api/v2".to_string()),
            timeout: 30,
            connect_timeout: 10,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "json".to_string(),
        },
    };
    assert!(settings.validate().is_ok());

    let mut invalid = settings.clone();
    invalid.api.connect_timeout = 0;
    assert!(invalid.validate().is_err());
}
