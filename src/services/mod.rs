//! Service layer module
//!
//! Contains the API client, its request executor, endpoint methods,
//! transport abstraction and header statistics parsing

pub mod client;
pub mod endpoints;
pub mod executor;
pub mod stats;
pub mod transport;

pub use client::{args, Args, ClientOption, FormFields, PodcastClient, PodcastClientBuilder};
pub use stats::parse_stats;
pub use transport::{HttpTransport, ReqwestTransport, TransportRequest, TransportResponse};
