//! Wire constants of the Listen Notes API

/// Production API base URL, used whenever an API key is supplied
pub const BASE_URL_PRODUCTION: &str = "https://listen-api.listennotes.com/api/v2";

/// Sandbox API base URL, used when no API key is supplied
pub const BASE_URL_TEST: &str = "https://listen-api-test.listennotes.com/api/v2";

/// Request header carrying the API key
pub const REQUEST_HEADER_KEY_API: &str = "X-ListenAPI-Key";

pub const RESPONSE_HEADER_KEY_FREE_QUOTA: &str = "X-ListenAPI-FreeQuota";
pub const RESPONSE_HEADER_KEY_USAGE: &str = "X-ListenAPI-Usage";
pub const RESPONSE_HEADER_KEY_LATENCY_SECONDS: &str = "X-ListenAPI-Latency-Seconds";
pub const RESPONSE_HEADER_KEY_NEXT_BILLING_DATE: &str = "X-ListenAPI-NextBillingDate";

/// chrono format of the next billing date header, e.g. `2020-09-26T17:27:33.110641+00:00`
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Default overall request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect (TCP + TLS) timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Form field carrying comma-joined identifiers for batch fetches
pub const FORM_FIELD_IDS: &str = "ids";
