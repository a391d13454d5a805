//! Listen Notes Podcast API client library
//!
//! Typed access to the Listen Notes podcast search API: authenticated requests,
//! query and form encoding, untyped JSON responses, a fixed status code error
//! table and usage statistics read from response headers.

pub mod config;
pub mod constants;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use models::{Response, ResponseStatistics};
pub use services::{
    args, Args, ClientOption, FormFields, HttpTransport, PodcastClient, PodcastClientBuilder,
    ReqwestTransport, TransportRequest, TransportResponse,
};
pub use utils::error::{ApiError, ApiErrorKind, ApiResult, BoxError};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
