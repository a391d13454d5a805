//! Data models module
//!
//! Defines the response structure shared by every endpoint

pub mod response;

pub use response::{to_json_string, Response, ResponseStatistics};
