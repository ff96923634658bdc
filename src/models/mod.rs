use serde::{Deserialize, Serialize};

use crate::services::duration::iso8601_to_hms;

/// Opaque video identifier as returned by the video platform
pub type VideoId = String;

/// Simplified video record returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub id: VideoId,
    pub title: Option<String>,
    pub channel: Option<String>,
    pub published_at: Option<String>,
    /// Best available thumbnail URL
    #[serde(rename = "thumb")]
    pub thumbnail_url: Option<String>,
    /// `H:MM:SS` or `M:SS`
    pub duration: String,
    /// View count exactly as reported upstream
    pub views: Option<String>,
}

/// Response body of the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub query: String,
    pub items: Vec<VideoSummary>,
}

impl SearchResponse {
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            items: Vec::new(),
        }
    }
}

// ============================================================================
// YouTube Data API Types
// ============================================================================

/// Raw API response from GET /search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSearchResponse {
    #[serde(default)]
    pub items: Vec<ApiSearchItem>,
}

impl ApiSearchResponse {
    /// Video ids in the order the platform ranked them, skipping items without one
    pub fn video_ids(&self) -> Vec<VideoId> {
        self.items
            .iter()
            .filter_map(|item| item.id.as_ref())
            .filter_map(|id| id.video_id.clone())
            .filter(|id| !id.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSearchItem {
    #[serde(default)]
    pub id: Option<ApiSearchItemId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSearchItemId {
    #[serde(default)]
    pub video_id: Option<String>,
}

/// Raw API response from GET /videos
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiVideoListResponse {
    #[serde(default)]
    pub items: Vec<ApiVideo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVideo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub snippet: ApiSnippet,
    #[serde(default)]
    pub content_details: ApiContentDetails,
    #[serde(default)]
    pub statistics: ApiStatistics,
}

impl ApiVideo {
    /// Reshapes a detail record into a summary; records without an id are dropped.
    pub fn into_summary(self) -> Option<VideoSummary> {
        let id = self.id?;
        let duration = self
            .content_details
            .duration
            .as_deref()
            .map(iso8601_to_hms)
            .unwrap_or_else(|| iso8601_to_hms("PT0S"));

        Some(VideoSummary {
            id,
            thumbnail_url: self.snippet.thumbnails.best_url(),
            title: self.snippet.title,
            channel: self.snippet.channel_title,
            published_at: self.snippet.published_at,
            duration,
            views: self.statistics.view_count,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSnippet {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub channel_title: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub thumbnails: ApiThumbnails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiThumbnails {
    #[serde(default)]
    pub maxres: Option<ApiThumbnail>,
    #[serde(default)]
    pub high: Option<ApiThumbnail>,
    #[serde(default)]
    pub medium: Option<ApiThumbnail>,
    #[serde(default, rename = "default")]
    pub standard_default: Option<ApiThumbnail>,
}

impl ApiThumbnails {
    /// First resolution with a URL, in order maxres, high, medium, default
    pub fn best_url(&self) -> Option<String> {
        [&self.maxres, &self.high, &self.medium, &self.standard_default]
            .into_iter()
            .flatten()
            .find_map(|thumb| thumb.url.clone())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiThumbnail {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiContentDetails {
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
}
