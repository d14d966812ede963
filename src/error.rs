//! Error types

use thiserror::Error;

/// Failures raised while talking to the video provider
#[derive(Error, Debug)]
pub enum SearchError {
    /// Free-form provider failure, displayed verbatim
    #[error("{0}")]
    Provider(String),

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("rate limited (HTTP 429)")]
    RateLimited,

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("ytInitialData not found in response after {attempts} attempt(s)")]
    MissingInitialData { attempts: u32 },

    #[error("malformed ytInitialData: {0}")]
    MalformedData(#[from] serde_json::Error),

    #[error("invalid request timeout: {0} seconds")]
    InvalidTimeout(f64),

    #[error("invalid provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, SearchError>;

/// Failures while turning command-line arguments into a request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("No search keyword provided")]
    MissingKeyword,

    #[error("invalid maxResults '{value}': expected an integer")]
    InvalidMaxResults { keyword: String, value: String },
}

impl RequestError {
    /// Keyword resolved before the failure, if any
    pub fn keyword(&self) -> Option<&str> {
        match self {
            RequestError::MissingKeyword => None,
            RequestError::InvalidMaxResults { keyword, .. } => Some(keyword),
        }
    }
}
