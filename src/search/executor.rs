//! Search execution

use super::request::SearchRequest;
use crate::provider::VideoProvider;
use crate::response::ResponseEnvelope;
use crate::video::NormalizedVideo;
use std::time::Instant;
use tracing::{info, warn};

/// Run one search against `provider` and wrap the outcome in an envelope.
/// Provider failures become failure envelopes carrying the keyword.
pub async fn execute<P>(provider: &P, request: &SearchRequest) -> ResponseEnvelope
where
    P: VideoProvider + ?Sized,
{
    let start = Instant::now();

    match provider
        .search(&request.keyword, request.max_results)
        .await
    {
        Ok(results) => {
            let videos: Vec<NormalizedVideo> =
                results.into_iter().map(NormalizedVideo::from).collect();
            info!(
                "{} returned {} videos for '{}' in {:?}",
                provider.name(),
                videos.len(),
                request.keyword,
                start.elapsed()
            );
            ResponseEnvelope::success(request.keyword.clone(), videos)
        }
        Err(e) => {
            warn!("{} search for '{}' failed: {}", provider.name(), request.keyword, e);
            ResponseEnvelope::failure(Some(request.keyword.clone()), e)
        }
    }
}
