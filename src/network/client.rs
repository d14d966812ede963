//! HTTP client for fetching provider pages

use super::user_agent::{accept_html, accept_language, generate_user_agent};
use crate::config::OutgoingSettings;
use crate::error::{Result, SearchError};
use crate::provider::{ProviderRequest, ProviderResponse};
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper carrying the outgoing settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
    extra_headers: HashMap<String, String>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let timeout = Duration::try_from_secs_f64(settings.request_timeout)
            .map_err(|_| SearchError::InvalidTimeout(settings.request_timeout))?;

        let mut builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        Ok(Self {
            client: builder.build()?,
            user_agent: settings
                .useragent
                .clone()
                .unwrap_or_else(generate_user_agent),
            extra_headers: settings.extra_headers.clone(),
        })
    }

    /// Execute a provider request
    pub async fn execute(&self, request: ProviderRequest) -> Result<ProviderResponse> {
        // Browser-like defaults
        let mut req_builder = self
            .client
            .get(&request.url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", accept_html())
            .header("Accept-Language", accept_language(&request.language))
            .header("DNT", "1");

        // Configured headers
        for (key, value) in &self.extra_headers {
            req_builder = req_builder.header(key, value);
        }

        // Add query parameters
        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        // Add cookies
        if !request.cookies.is_empty() {
            let cookie_str = request
                .cookies
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("; ");
            req_builder = req_builder.header("Cookie", cookie_str);
        }

        debug!("GET {} as {}", request.url, self.user_agent);
        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    async fn parse_response(response: Response) -> Result<ProviderResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(ProviderResponse { status, text, url })
    }
}
