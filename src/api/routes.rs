use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

/// Creates the main API router with all routes
///
/// CORS mirrors the caller's origin, method and headers with credentials allowed,
/// which is as open as browsers permit for credentialed requests.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        // Diagnostics
        .route("/test", get(handlers::database_probe))
        .route("/api/hello", get(handlers::hello))
        // Video search
        .route("/api/youtube/search", get(handlers::youtube_search))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::very_permissive())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}
