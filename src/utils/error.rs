//! Error handling module
//!
//! Defines the client error type and the status code classification table

use thiserror::Error;

/// Boxed error produced by a transport implementation
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error kinds derived solely from the HTTP status code of a response
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 400
    #[error("something wrong on your end (client side errors), e.g., missing required parameters")]
    BadRequest,

    /// 401
    #[error("wrong api key or your account is suspended")]
    Unauthorized,

    /// 404
    #[error("endpoint does not exist, or podcast / episode does not exist")]
    NotFound,

    /// 429
    #[error("for FREE plan, exceeding the quota limit; or for all plans, sending too many requests too fast and exceeding the rate limit - https://www.listennotes.com/api/faq/#faq17")]
    TooManyRequests,

    /// 500
    #[error("something wrong on our end (unexpected server errors)")]
    InternalServerError,
}

/// Status code to error kind table
///
/// Codes absent from the table are not errors: their bodies are decoded like a 200.
pub const STATUS_ERRORS: &[(u16, Option<ApiErrorKind>)] = &[
    (200, None),
    (400, Some(ApiErrorKind::BadRequest)),
    (401, Some(ApiErrorKind::Unauthorized)),
    (404, Some(ApiErrorKind::NotFound)),
    (429, Some(ApiErrorKind::TooManyRequests)),
    (500, Some(ApiErrorKind::InternalServerError)),
];

/// Look up the error kind mapped to a status code
pub fn classify_status(status: u16) -> Option<ApiErrorKind> {
    STATUS_ERRORS
        .iter()
        .find(|(code, _)| *code == status)
        .and_then(|(_, kind)| *kind)
}

impl ApiErrorKind {
    /// HTTP status code this kind is mapped from
    pub fn status_code(&self) -> u16 {
        match self {
            ApiErrorKind::BadRequest => 400,
            ApiErrorKind::Unauthorized => 401,
            ApiErrorKind::NotFound => 404,
            ApiErrorKind::TooManyRequests => 429,
            ApiErrorKind::InternalServerError => 500,
        }
    }

    /// Short machine readable name
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiErrorKind::BadRequest => "bad_request",
            ApiErrorKind::Unauthorized => "unauthorized",
            ApiErrorKind::NotFound => "not_found",
            ApiErrorKind::TooManyRequests => "too_many_requests",
            ApiErrorKind::InternalServerError => "internal_server_error",
        }
    }
}

/// Client error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be assembled; the transport was never invoked
    #[error("failed to create request to {path}: {source}")]
    Request {
        path: String,
        #[source]
        source: BoxError,
    },

    /// The transport failed before a response was received
    #[error("failed to execute request to {path}: {source}")]
    Transport {
        path: String,
        #[source]
        source: BoxError,
    },

    /// The API answered with a mapped error status
    #[error(transparent)]
    Api(#[from] ApiErrorKind),

    /// The response body was not a JSON object
    #[error("failed parsing the response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Mapped error kind, if this error came from the status code
    pub fn kind(&self) -> Option<ApiErrorKind> {
        match self {
            ApiError::Api(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Whether the error happened below the API (network, TLS, timeout)
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }

    /// Whether the response body failed to decode
    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode { .. })
    }

    /// Whether the request could not be built
    pub fn is_request(&self) -> bool {
        matches!(self, ApiError::Request { .. })
    }

    /// Whether detailed error information should be logged
    pub fn should_log_details(&self) -> bool {
        !matches!(self, ApiError::Api(ApiErrorKind::Unauthorized))
    }
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;
