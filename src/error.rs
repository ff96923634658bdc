use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Transport failure talking to the video platform (timeout, connect, bad body)
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Non-success response from the video platform, forwarded as-is
    #[error("Upstream returned status {status}: {body}")]
    Upstream {
        status: StatusCode,
        content_type: Option<HeaderValue>,
        body: String,
    },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Upstream {
                status,
                content_type,
                body,
            } => {
                let mut response = (status, body).into_response();
                if let Some(content_type) = content_type {
                    response
                        .headers_mut()
                        .insert(header::CONTENT_TYPE, content_type);
                }
                return response;
            }
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Configuration(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Database(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::HttpClient(e) => {
                tracing::error!(error = %e, timeout = e.is_timeout(), "Video platform unreachable");
                (StatusCode::BAD_GATEWAY, UPSTREAM_UNREACHABLE.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// Client-facing message for transport failures; details only go to the logs.
pub const UPSTREAM_UNREACHABLE: &str = "Upstream service unreachable";

pub type AppResult<T> = Result<T, AppError>;
