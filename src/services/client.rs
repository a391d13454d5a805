//! Listen Notes API client
//!
//! Holds the API key, base URL and transport. A client is immutable once built
//! and cheap to clone, so one instance can serve concurrent callers.

use crate::config::Settings;
use crate::constants::{BASE_URL_PRODUCTION, BASE_URL_TEST};
use crate::services::transport::{HttpTransport, ReqwestTransport};
use anyhow::Result;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Caller arguments, sent as query parameters (or form fields for submissions)
pub type Args = HashMap<String, String>;

/// Form body fields; a key may carry several values
pub type FormFields = BTreeMap<String, Vec<String>>;

/// Build an [`Args`] map from string-like pairs
pub fn args<I, K, V>(pairs: I) -> Args
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Construction-time option, applied in order after defaults
#[derive(Clone)]
pub enum ClientOption {
    /// Use a custom transport
    Transport(Arc<dyn HttpTransport>),
    /// Use an existing `reqwest` client as transport
    HttpClient(reqwest::Client),
    /// Use a custom base URL instead of the production/sandbox default
    BaseUrl(String),
}

impl fmt::Debug for ClientOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientOption::Transport(_) => f.write_str("Transport(..)"),
            ClientOption::HttpClient(_) => f.write_str("HttpClient(..)"),
            ClientOption::BaseUrl(url) => f.debug_tuple("BaseUrl").field(url).finish(),
        }
    }
}

/// Listen Notes API client
#[derive(Clone)]
pub struct PodcastClient {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for PodcastClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PodcastClient")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PodcastClient {
    /// Create a client with reasonable defaults
    ///
    /// Without an API key the client talks to the sandbox API, otherwise to production.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_options(api_key, Vec::new())
    }

    /// Create a client and apply options in the order given
    pub fn with_options(
        api_key: impl Into<String>,
        options: impl IntoIterator<Item = ClientOption>,
    ) -> Self {
        let api_key = api_key.into();
        let base_url = if api_key.is_empty() {
            BASE_URL_TEST
        } else {
            BASE_URL_PRODUCTION
        };

        let mut client = Self {
            api_key,
            base_url: base_url.to_string(),
            transport: Arc::new(ReqwestTransport::default()),
        };

        for option in options {
            client.apply(option);
        }

        debug!("Created Listen API client for {}", client.base_url);
        client
    }

    /// Start a fluent builder
    pub fn builder(api_key: impl Into<String>) -> PodcastClientBuilder {
        PodcastClientBuilder {
            api_key: api_key.into(),
            options: Vec::new(),
        }
    }

    /// Create a client from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transport =
            ReqwestTransport::with_timeouts(settings.api.timeout, settings.api.connect_timeout)?;

        let mut options = vec![ClientOption::Transport(Arc::new(transport))];
        if let Some(base_url) = &settings.api.base_url {
            options.push(ClientOption::BaseUrl(base_url.clone()));
        }

        Ok(Self::with_options(settings.api.api_key.clone(), options))
    }

    fn apply(&mut self, option: ClientOption) {
        match option {
            ClientOption::Transport(transport) => self.transport = transport,
            ClientOption::HttpClient(client) => {
                self.transport = Arc::new(ReqwestTransport::from_client(client))
            }
            ClientOption::BaseUrl(base_url) => self.base_url = base_url,
        }
    }

    /// Base URL every request path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether an API key was supplied
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Fluent builder for [`PodcastClient`]
#[derive(Debug)]
pub struct PodcastClientBuilder {
    api_key: String,
    options: Vec<ClientOption>,
}

impl PodcastClientBuilder {
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.options.push(ClientOption::Transport(transport));
        self
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.options.push(ClientOption::HttpClient(client));
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.options.push(ClientOption::BaseUrl(base_url.into()));
        self
    }

    pub fn build(self) -> PodcastClient {
        PodcastClient::with_options(self.api_key, self.options)
    }
}
