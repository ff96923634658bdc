/// Video platform provider abstraction
///
/// The search flow needs two capabilities from the platform: a ranked search by free-text
/// query and a batch detail lookup by video id. Keeping them behind one trait lets the
/// orchestrator be exercised without a network.
use crate::{
    error::AppResult,
    models::{ApiSearchResponse, ApiVideoListResponse, VideoId},
};

pub mod youtube;

pub use youtube::YouTubeProvider;

/// Facets requested from the detail lookup
pub const DETAIL_PARTS: &str = "snippet,contentDetails,statistics";

/// Trait for video platform providers
///
/// Implementations make exactly one attempt per call and surface any non-success
/// response as [`crate::error::AppError::Upstream`].
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait VideoPlatform: Send + Sync {
    /// Search videos matching `query`, at most `max_results` of them
    async fn search_videos(
        &self,
        query: &str,
        max_results: u8,
        api_key: &str,
    ) -> AppResult<ApiSearchResponse>;

    /// Fetch snippet, content details and statistics for all `ids` in one request
    async fn video_details(&self, ids: &[VideoId], api_key: &str)
        -> AppResult<ApiVideoListResponse>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
