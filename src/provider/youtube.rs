//! YouTube search provider (no API key required)
//!
//! Scrapes the public results page and reads the `ytInitialData` blob
//! embedded in it.

use super::traits::*;
use crate::config::Settings;
use crate::error::{Result, SearchError};
use crate::network::HttpClient;
use crate::video::RawResult;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

static INITIAL_DATA_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"ytInitialData"?\]?\s*=\s*"#).unwrap());

const SECTIONS_POINTER: &str =
    "/contents/twoColumnSearchResultsRenderer/primaryContents/sectionListRenderer/contents";

/// YouTube video search
pub struct YouTubeSearch {
    client: HttpClient,
    base_url: String,
    language: String,
    region: Option<String>,
    max_attempts: u32,
}

impl YouTubeSearch {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            base_url: "https://www.youtube.com/results".to_string(),
            language: "en".to_string(),
            region: None,
            max_attempts: 3,
        }
    }

    /// Build a provider, and its HTTP client, from settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = HttpClient::with_settings(&settings.outgoing)?;
        let search = &settings.search;

        Ok(Self::new(client)
            .with_base_url(&search.base_url)?
            .with_language(&search.language, search.region.clone())
            .with_max_attempts(search.max_attempts))
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = Url::parse(base_url)?.to_string();
        Ok(self)
    }

    pub fn with_language(mut self, language: impl Into<String>, region: Option<String>) -> Self {
        self.language = language.into();
        self.region = region;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    fn request(&self, keyword: &str) -> ProviderRequest {
        let mut request = ProviderRequest::get(&self.base_url)
            .language(&self.language)
            .param("search_query", keyword)
            // Skip the EU consent interstitial
            .cookie("CONSENT", "YES+");

        if !self.language.is_empty() {
            request = request.param("hl", &self.language);
        }
        if let Some(ref region) = self.region {
            request = request.param("gl", region);
        }
        request
    }

    /// Fetch the results page until it carries ytInitialData
    async fn fetch_initial_data(&self, keyword: &str) -> Result<Value> {
        for attempt in 1..=self.max_attempts {
            let response = self.client.execute(self.request(keyword)).await?;

            if response.is_rate_limited() {
                return Err(SearchError::RateLimited);
            }
            if !response.is_success() {
                return Err(SearchError::Http {
                    status: response.status,
                });
            }

            match Self::initial_data_json(&response.text) {
                Some(json) => return Ok(serde_json::from_str(json)?),
                None => warn!(
                    "No ytInitialData in response from {} (attempt {}/{})",
                    response.url, attempt, self.max_attempts
                ),
            }
        }

        Err(SearchError::MissingInitialData {
            attempts: self.max_attempts,
        })
    }

    /// Locate the ytInitialData JSON text inside the page
    fn initial_data_json(html: &str) -> Option<&str> {
        let marker = INITIAL_DATA_MARKER.find(html)?;
        let rest = &html[marker.end()..];

        let end = rest
            .find(";</script>")
            .or_else(|| rest.find("};").map(|i| i + 1))?;

        Some(&rest[..end])
    }

    /// Extract text from YouTube's `runs` / `simpleText` structure
    fn text_of(element: Option<&Value>) -> Option<String> {
        let element = element?;

        if let Some(runs) = element.get("runs").and_then(Value::as_array) {
            return Some(
                runs.iter()
                    .filter_map(|r| r.get("text").and_then(Value::as_str))
                    .collect(),
            );
        }

        element
            .get("simpleText")
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Parse the videos of the first section that has any
    fn parse_video_results(data: &Value) -> Vec<RawResult> {
        let sections = match data.pointer(SECTIONS_POINTER).and_then(Value::as_array) {
            Some(s) => s,
            None => {
                warn!("Unexpected ytInitialData layout, no result sections");
                return Vec::new();
            }
        };

        for section in sections {
            let contents = match section
                .pointer("/itemSectionRenderer/contents")
                .and_then(Value::as_array)
            {
                Some(c) => c,
                None => continue,
            };

            let results: Vec<RawResult> = contents
                .iter()
                .filter_map(|item| item.get("videoRenderer"))
                .map(Self::parse_video)
                .collect();

            if !results.is_empty() {
                return results;
            }
        }

        Vec::new()
    }

    fn parse_video(video: &Value) -> RawResult {
        let thumbnails: Vec<String> = video
            .pointer("/thumbnail/thumbnails")
            .and_then(Value::as_array)
            .map(|thumbs| {
                thumbs
                    .iter()
                    .filter_map(|t| t.get("url").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        RawResult {
            id: video
                .get("videoId")
                .and_then(Value::as_str)
                .map(str::to_string),
            title: Self::text_of(video.get("title")),
            long_desc: Self::text_of(video.get("descriptionSnippet")),
            duration: Self::text_of(video.get("lengthText")),
            channel: Self::text_of(video.get("longBylineText"))
                .or_else(|| Self::text_of(video.get("ownerText"))),
            views: Self::text_of(video.get("viewCountText")),
            publish_time: Self::text_of(video.get("publishedTimeText")),
            thumbnails,
        }
    }
}

#[async_trait]
impl VideoProvider for YouTubeSearch {
    fn name(&self) -> &str {
        "youtube"
    }

    async fn search(&self, keyword: &str, max_results: i64) -> Result<Vec<RawResult>> {
        info!("Searching {} for '{}'", self.name(), keyword);

        let data = self.fetch_initial_data(keyword).await?;
        let results = Self::parse_video_results(&data);
        debug!("Parsed {} videos", results.len());

        Ok(limit_results(results, max_results))
    }
}
