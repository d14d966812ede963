//! Response envelope written to standard output

use crate::error::RequestError;
use crate::video::NormalizedVideo;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt::Display;
use std::io::{self, Write};

/// Top-level JSON object, tagged by its `success` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseEnvelope {
    Success {
        keyword: String,
        videos: Vec<NormalizedVideo>,
    },
    Failure {
        /// Only set when the keyword was resolved before the failure
        keyword: Option<String>,
        error: String,
    },
}

impl ResponseEnvelope {
    pub fn success(keyword: impl Into<String>, videos: Vec<NormalizedVideo>) -> Self {
        Self::Success {
            keyword: keyword.into(),
            videos,
        }
    }

    pub fn failure(keyword: Option<String>, error: impl Display) -> Self {
        Self::Failure {
            keyword,
            error: error.to_string(),
        }
    }

    pub fn missing_keyword() -> Self {
        RequestError::MissingKeyword.into()
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Number of videos carried; zero for failures
    pub fn count(&self) -> usize {
        match self {
            Self::Success { videos, .. } => videos.len(),
            Self::Failure { .. } => 0,
        }
    }

    /// Write the envelope as one compact JSON document
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()
    }
}

impl From<RequestError> for ResponseEnvelope {
    fn from(err: RequestError) -> Self {
        let keyword = err.keyword().map(str::to_string);
        Self::failure(keyword, err)
    }
}

impl Serialize for ResponseEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { keyword, videos } => {
                let mut s = serializer.serialize_struct("ResponseEnvelope", 4)?;
                s.serialize_field("success", &true)?;
                s.serialize_field("keyword", keyword)?;
                s.serialize_field("count", &videos.len())?;
                s.serialize_field("videos", videos)?;
                s.end()
            }
            Self::Failure { keyword, error } => {
                let len = if keyword.is_some() { 3 } else { 2 };
                let mut s = serializer.serialize_struct("ResponseEnvelope", len)?;
                s.serialize_field("success", &false)?;
                if let Some(keyword) = keyword {
                    s.serialize_field("keyword", keyword)?;
                }
                s.serialize_field("error", error)?;
                s.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::RawResult;
    use serde_json::json;

    #[test]
    fn test_missing_keyword_shape() {
        let value = serde_json::to_value(ResponseEnvelope::missing_keyword()).unwrap();
        assert_eq!(
            value,
            json!({"success": false, "error": "No search keyword provided"})
        );
    }

    #[test]
    fn test_provider_failure_shape() {
        let envelope = ResponseEnvelope::failure(Some("cats".to_string()), "rate limited");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({"success": false, "keyword": "cats", "error": "rate limited"})
        );
    }

    #[test]
    fn test_success_count_matches_videos() {
        let videos = vec![
            NormalizedVideo::from(RawResult::new("a")),
            NormalizedVideo::from(RawResult::new("b")),
        ];
        let envelope = ResponseEnvelope::success("dogs", videos);
        assert!(envelope.is_success());
        assert_eq!(envelope.count(), 2);

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["keyword"], "dogs");
        assert_eq!(value["count"], 2);
        assert_eq!(value["videos"][0]["videoId"], "a");
        assert_eq!(value["videos"][1]["videoId"], "b");
    }

    #[test]
    fn test_write_to_is_compact_single_object() {
        let mut buf = Vec::new();
        ResponseEnvelope::missing_keyword().write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            r#"{"success":false,"error":"No search keyword provided"}"#
        );
    }

    #[test]
    fn test_invalid_max_results_keeps_keyword() {
        let envelope: ResponseEnvelope = RequestError::InvalidMaxResults {
            keyword: "cats".to_string(),
            value: "lots".to_string(),
        }
        .into();
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["keyword"], "cats");
        assert_eq!(value["success"], false);
    }
}
