use std::sync::Arc;

use crate::{
    config::Config,
    db::DataStoreHandle,
    error::AppResult,
    services::{VideoPlatform, VideoSearch, YouTubeProvider},
};

/// Shared application state
///
/// Immutable after startup; every request works on its own data.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub video_search: VideoSearch,
    pub data_store: DataStoreHandle,
}

impl AppState {
    /// Creates state from explicit collaborators
    pub fn new(config: Config, provider: Arc<dyn VideoPlatform>, data_store: DataStoreHandle) -> Self {
        let video_search = VideoSearch::new(provider, config.api_key().map(str::to_string));

        Self {
            config: Arc::new(config),
            video_search,
            data_store,
        }
    }

    /// Wires the YouTube provider and the optional database from configuration
    pub fn from_config(config: Config) -> AppResult<Self> {
        let provider = Arc::new(YouTubeProvider::new(config.youtube_api_url.clone())?);
        let data_store = DataStoreHandle::from_database_url(config.database_url.as_deref());

        if config.api_key().is_none() {
            tracing::warn!("No YouTube API key configured; search requests will fail");
        }

        Ok(Self::new(config, provider, data_store))
    }
}
