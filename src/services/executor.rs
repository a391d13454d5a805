//! Request executor
//!
//! Every endpoint funnels through [`PodcastClient::exec`]: assemble the request,
//! dispatch it through the transport, classify the status, decode the body and
//! collect header statistics.

use crate::constants::REQUEST_HEADER_KEY_API;
use crate::models::Response;
use crate::services::client::{Args, FormFields, PodcastClient};
use crate::services::stats::parse_stats;
use crate::services::transport::TransportRequest;
use crate::utils::error::{classify_status, ApiError, ApiResult};
use crate::utils::logging::query_log_summary;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, error, warn, Instrument};
use uuid::Uuid;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

impl PodcastClient {
    pub(crate) async fn get(&self, path: &str, args: &Args) -> ApiResult<Response> {
        self.exec(Method::GET, path, args, &FormFields::new()).await
    }

    pub(crate) async fn post(
        &self,
        path: &str,
        args: &Args,
        form_fields: &FormFields,
    ) -> ApiResult<Response> {
        self.exec(Method::POST, path, args, form_fields).await
    }

    pub(crate) async fn delete(&self, path: &str, args: &Args) -> ApiResult<Response> {
        self.exec(Method::DELETE, path, args, &FormFields::new()).await
    }

    /// Execute one request against `base_url/path`
    ///
    /// `args` become query parameters. A non-empty `form_fields` is sent as an
    /// urlencoded body. Mapped status codes short-circuit before the body is read
    /// as JSON.
    pub async fn exec(
        &self,
        method: Method,
        path: &str,
        args: &Args,
        form_fields: &FormFields,
    ) -> ApiResult<Response> {
        let span = tracing::debug_span!(
            "listen_api_request",
            request_id = %Uuid::new_v4(),
            method = %method,
            path = %path,
        );

        self.dispatch(method, path, args, form_fields)
            .instrument(span)
            .await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        args: &Args,
        form_fields: &FormFields,
    ) -> ApiResult<Response> {
        let request = self.build_request(method, path, args, form_fields)?;
        debug!("Sending request with query [{}]", query_log_summary(args));

        let started = Instant::now();
        let response = self.transport.execute(request).await.map_err(|source| {
            error!("Request to {} failed: {}", path, source);
            ApiError::Transport {
                path: path.to_string(),
                source,
            }
        })?;

        if let Some(kind) = classify_status(response.status) {
            warn!("API returned {} for {}: {}", response.status, path, kind.error_type());
            return Err(ApiError::Api(kind));
        }

        let data: Map<String, Value> = serde_json::from_slice(&response.body).map_err(|source| {
            error!("Failed to parse response from {}: {}", path, source);
            ApiError::Decode {
                path: path.to_string(),
                source,
            }
        })?;

        let stats = parse_stats(&response.headers);

        debug!(
            "Request completed with status {} in {}ms",
            response.status,
            started.elapsed().as_millis()
        );

        Ok(Response { stats, data })
    }

    /// Assemble the transport request; fails without touching the network
    fn build_request(
        &self,
        method: Method,
        path: &str,
        args: &Args,
        form_fields: &FormFields,
    ) -> ApiResult<TransportRequest> {
        let construction_error = |source: Box<dyn std::error::Error + Send + Sync>| {
            ApiError::Request {
                path: path.to_string(),
                source,
            }
        };

        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| construction_error(Box::new(e)))?;

        if !args.is_empty() {
            // Sorted keys keep the query string deterministic.
            let sorted: BTreeMap<&String, &String> = args.iter().collect();
            url.query_pairs_mut().extend_pairs(sorted);
        }

        let mut headers = HeaderMap::new();
        let api_key =
            HeaderValue::from_str(&self.api_key).map_err(|e| construction_error(Box::new(e)))?;
        headers.insert(REQUEST_HEADER_KEY_API, api_key);

        let body = if form_fields.is_empty() {
            None
        } else {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
            Some(encode_form(form_fields).into_bytes())
        };

        Ok(TransportRequest {
            method,
            url,
            headers,
            body,
        })
    }
}

/// Encode form fields as `application/x-www-form-urlencoded`
pub(crate) fn encode_form(form_fields: &FormFields) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, values) in form_fields {
        for value in values {
            serializer.append_pair(key, value);
        }
    }
    serializer.finish()
}
