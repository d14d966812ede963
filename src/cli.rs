//! Command-line entry point
//!
//! Arguments are taken positionally from argv with no flag handling, so
//! keywords such as `--help` or `--` are searched for verbatim.

use crate::config::Settings;
use crate::provider::YouTubeSearch;
use crate::response::ResponseEnvelope;
use crate::search::{self, SearchRequest};
use std::ffi::OsString;
use tracing::{debug, error};

/// Raw `<keyword> [maxResults]` arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub keyword: Option<String>,
    pub max_results: Option<String>,
    /// Anything past the second argument; ignored
    pub rest: Vec<String>,
}

impl CliArgs {
    /// Read the process arguments, skipping the program name
    pub fn from_env() -> Self {
        Self::from_args(std::env::args_os().skip(1))
    }

    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(|arg| {
            let arg: OsString = arg.into();
            arg.to_string_lossy().into_owned()
        });

        Self {
            keyword: args.next(),
            max_results: args.next(),
            rest: args.collect(),
        }
    }
}

/// Resolve the arguments and run one search. Every failure, including a
/// settings failure, comes back as an envelope.
pub async fn run(args: CliArgs, settings: anyhow::Result<Settings>) -> ResponseEnvelope {
    if !args.rest.is_empty() {
        debug!("Ignoring extra arguments: {:?}", args.rest);
    }

    let default_max = settings
        .as_ref()
        .map(|s| s.search.default_max_results)
        .unwrap_or(crate::DEFAULT_MAX_RESULTS);

    // The missing-keyword shape wins over any settings failure
    let request =
        match SearchRequest::resolve(args.keyword, args.max_results.as_deref(), default_max) {
            Ok(request) => request,
            Err(e) => return e.into(),
        };

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings: {:#}", e);
            return ResponseEnvelope::failure(Some(request.keyword), format!("{:#}", e));
        }
    };

    let provider = match YouTubeSearch::from_settings(&settings) {
        Ok(provider) => provider,
        Err(e) => {
            error!("Failed to initialize provider: {}", e);
            return ResponseEnvelope::failure(Some(request.keyword), e);
        }
    };

    debug!(
        "ytsearch v{}: keyword='{}' max_results={}",
        crate::VERSION,
        request.keyword,
        request.max_results
    );

    search::execute(&provider, &request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_from_args_positional() {
        let args = CliArgs::from_args(["cats", "3"]);
        assert_eq!(args.keyword.as_deref(), Some("cats"));
        assert_eq!(args.max_results.as_deref(), Some("3"));
        assert!(args.rest.is_empty());

        assert_eq!(CliArgs::from_args(Vec::<String>::new()), CliArgs::default());
    }

    #[test]
    fn test_from_args_keeps_flag_like_values() {
        for keyword in ["--help", "-h", "--version", "-V", "--", "-cats"] {
            let args = CliArgs::from_args([keyword]);
            assert_eq!(args.keyword.as_deref(), Some(keyword));
        }

        let args = CliArgs::from_args(["cats", "-h"]);
        assert_eq!(args.max_results.as_deref(), Some("-h"));

        let args = CliArgs::from_args(["--", "x"]);
        assert_eq!(args.keyword.as_deref(), Some("--"));
        assert_eq!(args.max_results.as_deref(), Some("x"));
    }

    #[test]
    fn test_from_args_extra_arguments() {
        let args = CliArgs::from_args(["cats", "2", "extra", "--more"]);
        assert_eq!(args.rest, vec!["extra", "--more"]);
    }

    #[test]
    fn test_missing_keyword_before_settings_failure() {
        let envelope = tokio_test::block_on(run(
            CliArgs::default(),
            Err(anyhow::anyhow!("broken settings file")),
        ));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": false, "error": "No search keyword provided"})
        );
    }

    #[test]
    fn test_settings_failure_carries_keyword() {
        let envelope = tokio_test::block_on(run(
            CliArgs::from_args(["cats"]),
            Err(anyhow::anyhow!("broken settings file")),
        ));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": false, "keyword": "cats", "error": "broken settings file"})
        );
    }

    #[test]
    fn test_invalid_max_results() {
        let envelope = tokio_test::block_on(run(
            CliArgs::from_args(["cats", "-h"]),
            Ok(Settings::default()),
        ));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["keyword"], "cats");
        assert_eq!(value["error"], "invalid maxResults '-h': expected an integer");
    }

    #[tokio::test]
    async fn test_unusable_timeout_becomes_failure_envelope() {
        let mut settings = Settings::default();
        settings.outgoing.request_timeout = f64::INFINITY;

        let envelope = run(CliArgs::from_args(["cats"]), Ok(settings)).await;
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["keyword"], "cats");
        assert_eq!(value["error"], "invalid request timeout: inf seconds");
    }

    #[tokio::test]
    async fn test_flag_like_keyword_is_searched() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("search_query", "--help"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<script>var ytInitialData = {"contents": {}};</script>"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let mut settings = Settings::default();
        settings.search.base_url = format!("{}/results", server.uri());

        let envelope = run(CliArgs::from_args(["--help"]), Ok(settings)).await;
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": true, "keyword": "--help", "count": 0, "videos": []})
        );
    }
}
