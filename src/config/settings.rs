//! Settings structures for ytsearch-rs

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use url::Url;

/// Main settings structure, loaded from YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (YTSEARCH_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any variable source
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("YTSEARCH_MAX_RESULTS") {
            if let Ok(n) = val.trim().parse() {
                self.search.default_max_results = n;
            }
        }
        if let Some(val) = lookup("YTSEARCH_TIMEOUT") {
            if let Ok(secs) = val.trim().parse() {
                self.outgoing.request_timeout = secs;
            }
        }
        if let Some(val) = lookup("YTSEARCH_BASE_URL") {
            self.search.base_url = val;
        }
        if let Some(val) = lookup("YTSEARCH_LANGUAGE") {
            self.search.language = val;
        }
        if let Some(val) = lookup("YTSEARCH_PROXY") {
            self.outgoing.proxies.all = Some(val);
        }
    }

    /// Reject settings the provider cannot work with
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.search.base_url)?;
        if self.search.max_attempts == 0 {
            bail!("search.max_attempts must be at least 1");
        }
        let timeout = self.outgoing.request_timeout;
        if !timeout.is_finite() || timeout <= 0.0 || timeout > crate::MAX_REQUEST_TIMEOUT {
            bail!(
                "outgoing.request_timeout must be in (0, {}] seconds, got {}",
                crate::MAX_REQUEST_TIMEOUT,
                timeout
            );
        }
        Ok(())
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Result limit when none is given on the command line
    pub default_max_results: i64,
    /// Results page to query
    pub base_url: String,
    /// Interface language (`hl`)
    pub language: String,
    /// Content region (`gl`)
    pub region: Option<String>,
    /// Fetches to try while the page lacks ytInitialData
    pub max_attempts: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_max_results: crate::DEFAULT_MAX_RESULTS,
            base_url: "https://www.youtube.com/results".to_string(),
            language: "en".to_string(),
            region: None,
            max_attempts: 3,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Fixed user agent (none = random)
    pub useragent: Option<String>,
    /// Pool max size
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            useragent: None,
            pool_maxsize: 4,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}
