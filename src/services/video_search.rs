use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{SearchResponse, VideoId, VideoSummary},
    services::providers::VideoPlatform,
};

pub const DEFAULT_MAX_RESULTS: i64 = 12;
pub const MIN_MAX_RESULTS: i64 = 1;
pub const MAX_MAX_RESULTS: i64 = 25;

/// Search-and-enrich flow over a [`VideoPlatform`]
///
/// Runs the ranked search, then a single batched detail lookup, and returns the
/// summaries in search order. Ids missing from the detail response are dropped.
#[derive(Clone)]
pub struct VideoSearch {
    provider: Arc<dyn VideoPlatform>,
    api_key: Option<String>,
}

impl VideoSearch {
    pub fn new(provider: Arc<dyn VideoPlatform>, api_key: Option<String>) -> Self {
        Self {
            provider,
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    pub async fn search(&self, query: &str, max_results: i64) -> AppResult<SearchResponse> {
        let max_results = validate(query, max_results)?;

        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::Configuration("YouTube API key not configured".to_string())
        })?;

        let search = self
            .provider
            .search_videos(query, max_results, api_key)
            .await?;

        let ids = search.video_ids();
        if ids.is_empty() {
            tracing::info!(query = %query, "Search returned no videos");
            return Ok(SearchResponse::empty(query));
        }

        let details = self.provider.video_details(&ids, api_key).await?;

        let by_id: HashMap<VideoId, VideoSummary> = details
            .items
            .into_iter()
            .filter_map(|video| video.into_summary())
            .map(|summary| (summary.id.clone(), summary))
            .collect();

        let items = order_by_search(&ids, &by_id);

        if items.len() < ids.len() {
            tracing::warn!(
                query = %query,
                searched = ids.len(),
                detailed = items.len(),
                provider = self.provider.name(),
                "Detail lookup omitted some searched videos"
            );
        }

        Ok(SearchResponse {
            query: query.to_string(),
            items,
        })
    }
}

fn validate(query: &str, max_results: i64) -> AppResult<u8> {
    if query.is_empty() {
        return Err(AppError::InvalidInput(
            "Search query cannot be empty".to_string(),
        ));
    }

    if !(MIN_MAX_RESULTS..=MAX_MAX_RESULTS).contains(&max_results) {
        return Err(AppError::InvalidInput(format!(
            "maxResults must be between {} and {}, got {}",
            MIN_MAX_RESULTS, MAX_MAX_RESULTS, max_results
        )));
    }

    u8::try_from(max_results).map_err(|e| AppError::InvalidInput(e.to_string()))
}

/// Emits summaries following `ids`; ids without a summary are skipped.
fn order_by_search(ids: &[VideoId], by_id: &HashMap<VideoId, VideoSummary>) -> Vec<VideoSummary> {
    ids.iter().filter_map(|id| by_id.get(id).cloned()).collect()
}
