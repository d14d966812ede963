//! Raw and normalized video records

use super::parse::{duration_to_iso, parse_view_count};
use serde::{Deserialize, Serialize};

/// One video as reported by the provider. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawResult {
    /// Video ID
    pub id: Option<String>,
    /// Video title
    pub title: Option<String>,
    /// Description snippet
    pub long_desc: Option<String>,
    /// Length as shown on the page, e.g. "21:53"
    pub duration: Option<String>,
    /// Channel name
    pub channel: Option<String>,
    /// View count text, e.g. "994,843 views"
    pub views: Option<String>,
    /// Relative publish time, e.g. "2 years ago"
    pub publish_time: Option<String>,
    /// Thumbnail URLs, best first
    pub thumbnails: Vec<String>,
}

impl RawResult {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }
}

/// The fixed output shape for a single video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedVideo {
    #[serde(rename = "videoId")]
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    #[serde(rename = "durationISO")]
    pub duration_iso: String,
    pub channel: String,
    pub views: String,
    #[serde(rename = "viewCount")]
    pub view_count: u64,
    pub published: String,
    /// Reserved, never populated
    #[serde(rename = "publishedISO")]
    pub published_iso: String,
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: String,
    #[serde(rename = "embedUrl")]
    pub embed_url: String,
    #[serde(rename = "watchUrl")]
    pub watch_url: String,
}

impl From<RawResult> for NormalizedVideo {
    fn from(raw: RawResult) -> Self {
        let video_id = raw.id.unwrap_or_default();
        let duration_iso = duration_to_iso(raw.duration.as_deref().unwrap_or_default());
        let view_count = parse_view_count(raw.views.as_deref().unwrap_or_default());
        let thumbnail_url = raw
            .thumbnails
            .into_iter()
            .next()
            .unwrap_or_else(|| format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", video_id));

        Self {
            title: raw.title.unwrap_or_default(),
            description: raw.long_desc.unwrap_or_default(),
            duration: raw.duration.unwrap_or_else(|| "0:00".to_string()),
            duration_iso,
            channel: raw.channel.unwrap_or_default(),
            views: raw.views.unwrap_or_else(|| "0 views".to_string()),
            view_count,
            published: raw.publish_time.unwrap_or_default(),
            published_iso: String::new(),
            thumbnail_url,
            embed_url: format!("https://www.youtube.com/embed/{}", video_id),
            watch_url: format!("https://www.youtube.com/watch?v={}", video_id),
            video_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record() {
        let raw = RawResult {
            id: Some("dQw4w9WgXcQ".to_string()),
            title: Some("Never Gonna Give You Up".to_string()),
            long_desc: Some("The official video".to_string()),
            duration: Some("3:33".to_string()),
            channel: Some("Rick Astley".to_string()),
            views: Some("1,234,567 views".to_string()),
            publish_time: Some("14 years ago".to_string()),
            thumbnails: vec![
                "https://i.ytimg.com/vi/dQw4w9WgXcQ/hq720.jpg".to_string(),
                "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg".to_string(),
            ],
        };

        let video = NormalizedVideo::from(raw);
        assert_eq!(video.video_id, "dQw4w9WgXcQ");
        assert_eq!(video.description, "The official video");
        assert_eq!(video.duration_iso, "PT3M33S");
        assert_eq!(video.view_count, 1_234_567);
        assert_eq!(video.published, "14 years ago");
        assert_eq!(video.published_iso, "");
        assert_eq!(
            video.thumbnail_url,
            "https://i.ytimg.com/vi/dQw4w9WgXcQ/hq720.jpg"
        );
        assert_eq!(video.embed_url, "https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(
            video.watch_url,
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let video = NormalizedVideo::from(RawResult::new("abc123"));

        assert_eq!(video.title, "");
        assert_eq!(video.description, "");
        assert_eq!(video.duration, "0:00");
        assert_eq!(video.duration_iso, "PT0S");
        assert_eq!(video.channel, "");
        assert_eq!(video.views, "0 views");
        assert_eq!(video.view_count, 0);
        assert_eq!(video.published, "");
        assert_eq!(
            video.thumbnail_url,
            "https://i.ytimg.com/vi/abc123/hqdefault.jpg"
        );
    }

    #[test]
    fn test_all_keys_serialized() {
        let value = serde_json::to_value(NormalizedVideo::from(RawResult::default())).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "videoId",
            "title",
            "description",
            "duration",
            "durationISO",
            "channel",
            "views",
            "viewCount",
            "published",
            "publishedISO",
            "thumbnailUrl",
            "embedUrl",
            "watchUrl",
        ] {
            assert!(object.contains_key(key), "missing {}", key);
        }
        assert_eq!(object.len(), 13);
        assert_eq!(value["videoId"], "");
        assert_eq!(value["viewCount"], 0);
        assert_eq!(value["watchUrl"], "https://www.youtube.com/watch?v=");
    }

    #[test]
    fn test_raw_result_tolerates_missing_keys() {
        let raw: RawResult = serde_json::from_str(r#"{"id": "xyz", "views": "5 views"}"#).unwrap();
        assert_eq!(raw.id.as_deref(), Some("xyz"));
        assert!(raw.thumbnails.is_empty());
        assert_eq!(NormalizedVideo::from(raw).view_count, 5);
    }
}
