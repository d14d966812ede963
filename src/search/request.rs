//! Search request built from command-line arguments

use crate::error::RequestError;

/// A single keyword search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Search keyword, never empty
    pub keyword: String,
    /// Result limit; no range is enforced
    pub max_results: i64,
}

impl SearchRequest {
    pub fn new(keyword: impl Into<String>, max_results: i64) -> Self {
        Self {
            keyword: keyword.into(),
            max_results,
        }
    }

    /// Resolve the positional `<keyword> [maxResults]` arguments.
    ///
    /// An absent or empty keyword is reported before anything else; a
    /// missing limit falls back to `default_max_results`.
    pub fn resolve(
        keyword: Option<String>,
        max_results: Option<&str>,
        default_max_results: i64,
    ) -> Result<Self, RequestError> {
        let keyword = match keyword {
            Some(k) if !k.is_empty() => k,
            _ => return Err(RequestError::MissingKeyword),
        };

        let max_results = match max_results {
            None => default_max_results,
            Some(raw) => match raw.trim().parse() {
                Ok(n) => n,
                Err(_) => {
                    return Err(RequestError::InvalidMaxResults {
                        keyword,
                        value: raw.to_string(),
                    })
                }
            },
        };

        Ok(Self::new(keyword, max_results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let request = SearchRequest::resolve(Some("cats".to_string()), None, 5).unwrap();
        assert_eq!(request, SearchRequest::new("cats", 5));
    }

    #[test]
    fn test_resolve_explicit_limit() {
        let request = SearchRequest::resolve(Some("cats".to_string()), Some("12"), 5).unwrap();
        assert_eq!(request.max_results, 12);

        let request = SearchRequest::resolve(Some("cats".to_string()), Some("-1"), 5).unwrap();
        assert_eq!(request.max_results, -1);
    }

    #[test]
    fn test_resolve_missing_keyword() {
        assert_eq!(
            SearchRequest::resolve(None, Some("3"), 5),
            Err(RequestError::MissingKeyword)
        );
        assert_eq!(
            SearchRequest::resolve(Some(String::new()), None, 5),
            Err(RequestError::MissingKeyword)
        );
    }

    #[test]
    fn test_resolve_invalid_limit() {
        let err = SearchRequest::resolve(Some("cats".to_string()), Some("ten"), 5).unwrap_err();
        assert_eq!(
            err,
            RequestError::InvalidMaxResults {
                keyword: "cats".to_string(),
                value: "ten".to_string(),
            }
        );
    }
}
