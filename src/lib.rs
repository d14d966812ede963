//! ytsearch-rs: keyword video search helper
//!
//! Queries YouTube's public results page for a keyword, maps every video
//! onto a fixed record shape and prints one JSON envelope for a calling
//! process to consume.

pub mod cli;
pub mod config;
pub mod error;
pub mod network;
pub mod provider;
pub mod response;
pub mod search;
pub mod video;

pub use config::Settings;
pub use error::{RequestError, SearchError};
pub use provider::{VideoProvider, YouTubeSearch};
pub use response::ResponseEnvelope;
pub use search::SearchRequest;
pub use video::{NormalizedVideo, RawResult};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound for `outgoing.request_timeout`, in seconds
pub const MAX_REQUEST_TIMEOUT: f64 = 300.0;

/// Result limit used when neither the command line nor settings give one
pub const DEFAULT_MAX_RESULTS: i64 = 5;
