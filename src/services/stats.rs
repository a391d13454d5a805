//! Response statistics parsing
//!
//! Extracts quota, usage, latency and billing information from response headers.
//! Parsing never fails: an unreadable header leaves its field empty.

use crate::constants::*;
use crate::models::ResponseStatistics;
use chrono::DateTime;
use reqwest::header::HeaderMap;
use std::str::FromStr;
use tracing::debug;

/// Parse the statistics headers of a response
pub fn parse_stats(headers: &HeaderMap) -> ResponseStatistics {
    ResponseStatistics {
        free_quota: parse_header(headers, RESPONSE_HEADER_KEY_FREE_QUOTA),
        usage: parse_header(headers, RESPONSE_HEADER_KEY_USAGE),
        latency_seconds: parse_header(headers, RESPONSE_HEADER_KEY_LATENCY_SECONDS),
        next_billing_date: header_str(headers, RESPONSE_HEADER_KEY_NEXT_BILLING_DATE).and_then(
            |value| match DateTime::parse_from_str(value, TIME_FORMAT) {
                Ok(date) => Some(date),
                Err(e) => {
                    debug!("Ignoring unparseable {} header {:?}: {}", RESPONSE_HEADER_KEY_NEXT_BILLING_DATE, value, e);
                    None
                }
            },
        ),
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name)?.to_str().ok().map(str::trim)
}

fn parse_header<T>(headers: &HeaderMap, name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = header_str(headers, name)?;
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!("Ignoring unparseable {} header {:?}: {}", name, value, e);
            None
        }
    }
}
