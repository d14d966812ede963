//! Provider traits and types

use crate::error::Result;
use crate::video::RawResult;
use async_trait::async_trait;
use std::collections::HashMap;

/// Source of raw video records for a keyword
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Search for `keyword`, returning at most `max_results` records in
    /// the provider's order. Negative limits drop that many from the end.
    async fn search(&self, keyword: &str, max_results: i64) -> Result<Vec<RawResult>>;
}

/// GET request to be made by a provider
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// URL to request
    pub url: String,
    /// Interface language for Accept-Language
    pub language: String,
    /// Query parameters
    pub params: HashMap<String, String>,
    /// Cookies to send
    pub cookies: HashMap<String, String>,
}

impl ProviderRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            language: String::new(),
            params: HashMap::new(),
            cookies: HashMap::new(),
        }
    }

    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.language = lang.into();
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add a cookie
    pub fn cookie(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(key.into(), value.into());
        self
    }
}

/// HTTP response from a provider request
#[derive(Debug)]
pub struct ProviderResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl ProviderResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if response indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// Apply a result limit with slice semantics: `n >= 0` keeps the first
/// `n` records, `n < 0` drops `|n|` records from the end.
pub fn limit_results<T>(mut results: Vec<T>, max_results: i64) -> Vec<T> {
    let len = results.len();
    let keep = if max_results >= 0 {
        usize::try_from(max_results).unwrap_or(usize::MAX).min(len)
    } else {
        let drop = usize::try_from(max_results.unsigned_abs()).unwrap_or(usize::MAX);
        len.saturating_sub(drop)
    };
    results.truncate(keep);
    results
}
