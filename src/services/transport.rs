//! HTTP transport
//!
//! The executor hands a fully assembled request to an [`HttpTransport`] and gets
//! back a fully read response. The default transport is backed by `reqwest`;
//! tests and callers with special networking needs can inject their own.

use crate::constants::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use crate::utils::error::BoxError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Url};
use std::time::Duration;
use tracing::{debug, warn};

/// Request as handed to the transport
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Response as returned by the transport, body fully read
#[derive(Debug, Clone, Default)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Injectable HTTP capability: execute one request, return its response or an error
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, BoxError>;
}

/// Default transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with custom timeouts
    pub fn with_timeouts(timeout_secs: u64, connect_timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(concat!("podcast-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Get inner client reference
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

impl Default for ReqwestTransport {
    /// 30s overall timeout, 10s connect timeout
    fn default() -> Self {
        Self::with_timeouts(DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS).unwrap_or_else(|e| {
            warn!("{:#}, falling back to a client without timeouts", e);
            Self::from_client(Client::new())
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, BoxError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        // Reading the full body hands the connection back to the pool.
        let body = response.bytes().await?.to_vec();

        debug!("Transport received {} bytes with status {}", body.len(), status);

        Ok(TransportResponse { status, headers, body })
    }
}
