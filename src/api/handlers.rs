use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::SearchResponse,
    services::{
        diagnostics::{probe_database, DatabaseReport},
        video_search::DEFAULT_MAX_RESULTS,
    },
};

use super::AppState;

// Request/Response types

/// Search query parameters; a repeated parameter keeps its last value.
#[derive(Debug, Default, PartialEq)]
pub struct SearchParams {
    pub q: Option<String>,
    pub max_results: Option<i64>,
}

impl SearchParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> AppResult<Self> {
        let mut params = SearchParams::default();

        for (name, value) in pairs {
            match name.as_str() {
                "q" => params.q = Some(value),
                "maxResults" => {
                    let max_results = value.parse::<i64>().map_err(|_| {
                        AppError::InvalidInput(format!("maxResults must be an integer, got {:?}", value))
                    })?;
                    params.max_results = Some(max_results);
                }
                _ => {}
            }
        }

        Ok(params)
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// Handlers

/// Root greeting
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the Rust backend!",
    })
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!",
    })
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Database diagnostics; always answers 200
pub async fn database_probe(State(state): State<AppState>) -> Json<DatabaseReport> {
    Json(probe_database(&state.data_store, &state.config).await)
}

/// Search videos and enrich them with duration and view counts
pub async fn youtube_search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<SearchResponse>> {
    let Query(pairs) = pairs.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let params = SearchParams::from_pairs(pairs)?;

    let query = params
        .q
        .ok_or_else(|| AppError::InvalidInput("Query parameter `q` is required".to_string()))?;
    let max_results = params.max_results.unwrap_or(DEFAULT_MAX_RESULTS);

    tracing::info!(
        request_id = %request_id,
        query = %query,
        max_results,
        "Processing video search request"
    );

    let response = state.video_search.search(&query, max_results).await?;

    tracing::info!(
        request_id = %request_id,
        results = response.items.len(),
        "Video search completed"
    );

    Ok(Json(response))
}
