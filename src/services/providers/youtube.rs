/// YouTube Data API v3 provider
///
/// API Flow:
/// 1. Search: /search?type=video → ranked video ids
/// 2. Details: /videos?id=a,b,c → snippet, duration and statistics per id
use std::time::Duration;

use axum::http::{header, StatusCode};
use reqwest::{Client as HttpClient, Response};

use crate::{
    error::{AppError, AppResult},
    models::{ApiSearchResponse, ApiVideoListResponse, VideoId},
    services::providers::{VideoPlatform, DETAIL_PARTS},
};

/// Applies to each outbound call independently
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Request URLs carry the API key, so they never travel with the error.
fn transport_error(error: reqwest::Error) -> AppError {
    AppError::HttpClient(error.without_url())
}

#[derive(Clone)]
pub struct YouTubeProvider {
    http_client: HttpClient,
    api_url: String,
}

impl YouTubeProvider {
    pub fn new(api_url: impl Into<String>) -> AppResult<Self> {
        Self::with_timeout(api_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(api_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            http_client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Turns a non-success response into an error carrying the platform's status and body.
    async fn ensure_success(response: Response) -> AppResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| header::HeaderValue::from_str(v).ok());
        let body = response.text().await.unwrap_or_default();

        tracing::warn!(
            status = %status,
            provider = "youtube",
            "YouTube API returned an error"
        );

        Err(AppError::Upstream {
            status,
            content_type,
            body,
        })
    }
}

#[async_trait::async_trait]
impl VideoPlatform for YouTubeProvider {
    async fn search_videos(
        &self,
        query: &str,
        max_results: u8,
        api_key: &str,
    ) -> AppResult<ApiSearchResponse> {
        let url = format!("{}/search", self.api_url);
        let max_results = max_results.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("q", query),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let results: ApiSearchResponse = Self::ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport_error)?;

        tracing::info!(
            query = %query,
            results = results.items.len(),
            provider = "youtube",
            "Video search completed"
        );

        Ok(results)
    }

    async fn video_details(
        &self,
        ids: &[VideoId],
        api_key: &str,
    ) -> AppResult<ApiVideoListResponse> {
        let url = format!("{}/videos", self.api_url);
        let joined_ids = ids.join(",");

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("part", DETAIL_PARTS),
                ("id", joined_ids.as_str()),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let details: ApiVideoListResponse = Self::ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport_error)?;

        tracing::info!(
            requested = ids.len(),
            returned = details.items.len(),
            provider = "youtube",
            "Video details fetched"
        );

        Ok(details)
    }

    fn name(&self) -> &'static str {
        "youtube"
    }
}
