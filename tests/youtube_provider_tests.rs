use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

use vidsearch_api::{
    api::{create_router, AppState},
    config::Config,
    db::DataStoreHandle,
    error::{AppError, UPSTREAM_UNREACHABLE},
    services::{VideoPlatform, YouTubeProvider},
};

type Recorded = Arc<Mutex<Vec<(String, HashMap<String, String>)>>>;

async fn fake_search(
    State(recorded): State<Recorded>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let quota_hit = params.get("q").map(String::as_str) == Some("quota");
    recorded.lock().unwrap().push(("search".to_string(), params));

    if quota_hit {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": { "code": 403, "message": "quotaExceeded" } })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "items": [
                { "id": { "kind": "youtube#video", "videoId": "abc" } },
                { "id": { "kind": "youtube#video", "videoId": "def" } }
            ]
        })),
    )
}

async fn fake_videos(
    State(recorded): State<Recorded>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    recorded.lock().unwrap().push(("videos".to_string(), params));

    Json(json!({
        "items": [
            {
                "id": "def",
                "snippet": { "title": "Second" },
                "contentDetails": { "duration": "PT90M" },
                "statistics": { "viewCount": "7" }
            }
        ]
    }))
}

async fn slow_search() -> impl IntoResponse {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!({ "items": [] }))
}

async fn garbled_search() -> impl IntoResponse {
    "this is not json"
}

/// Serves a stand-in for the YouTube Data API on an ephemeral port
async fn spawn_upstream() -> (String, Recorded) {
    let recorded: Recorded = Arc::default();
    let app = Router::new()
        .route("/youtube/v3/search", get(fake_search))
        .route("/youtube/v3/videos", get(fake_videos))
        .route("/slow/search", get(slow_search))
        .route("/garbled/search", get(garbled_search))
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/youtube/v3", address), recorded)
}

#[tokio::test]
async fn test_search_sends_expected_parameters() {
    let (base_url, recorded) = spawn_upstream().await;
    let provider = YouTubeProvider::new(base_url).unwrap();

    let response = provider.search_videos("rust lang", 7, "secret").await.unwrap();
    assert_eq!(response.video_ids(), vec!["abc".to_string(), "def".to_string()]);

    let calls = recorded.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (endpoint, params) = &calls[0];
    assert_eq!(endpoint, "search");
    assert_eq!(params["part"], "snippet");
    assert_eq!(params["type"], "video");
    assert_eq!(params["maxResults"], "7");
    assert_eq!(params["q"], "rust lang");
    assert_eq!(params["key"], "secret");
}

#[tokio::test]
async fn test_details_batches_ids() {
    let (base_url, recorded) = spawn_upstream().await;
    let provider = YouTubeProvider::new(base_url).unwrap();

    let ids = vec!["abc".to_string(), "def".to_string()];
    let response = assert_ok!(provider.video_details(&ids, "secret").await);
    assert_eq!(response.items.len(), 1);

    let summary = response.items[0].clone().into_summary().unwrap();
    assert_eq!(summary.duration, "1:30:00");

    let calls = recorded.lock().unwrap();
    let (endpoint, params) = &calls[0];
    assert_eq!(endpoint, "videos");
    assert_eq!(params["part"], "snippet,contentDetails,statistics");
    assert_eq!(params["id"], "abc,def");
    assert_eq!(params["key"], "secret");
}

#[tokio::test]
async fn test_non_success_is_forwarded_verbatim() {
    let (base_url, _recorded) = spawn_upstream().await;
    let provider = YouTubeProvider::new(base_url).unwrap();

    match provider.search_videos("quota", 5, "secret").await {
        Err(AppError::Upstream {
            status,
            content_type,
            body,
        }) => {
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(content_type.unwrap(), "application/json");
            let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(parsed["error"]["message"], "quotaExceeded");
        }
        other => panic!("expected upstream error, got {:?}", other.map(|r| r.items.len())),
    }
}

#[tokio::test]
async fn test_unknown_route_is_upstream_not_found() {
    let (base_url, _recorded) = spawn_upstream().await;
    let provider = YouTubeProvider::new(format!("{}/missing", base_url)).unwrap();

    let error = assert_err!(provider.search_videos("rust", 5, "secret").await);
    assert!(matches!(
        error,
        AppError::Upstream { status: StatusCode::NOT_FOUND, .. }
    ));
}

fn root_of(base_url: &str) -> String {
    base_url.trim_end_matches("/youtube/v3").to_string()
}

#[tokio::test]
async fn test_timeout_is_transport_error_without_url() {
    let (base_url, _recorded) = spawn_upstream().await;
    let provider = YouTubeProvider::with_timeout(
        format!("{}/slow", root_of(&base_url)),
        Duration::from_millis(200),
    )
    .unwrap();

    match provider.search_videos("rust", 5, "secret").await {
        Err(AppError::HttpClient(e)) => {
            assert!(e.is_timeout());
            assert!(e.url().is_none());
            assert!(!e.to_string().contains("secret"));
        }
        other => panic!("expected transport error, got {:?}", other.map(|r| r.items.len())),
    }
}

#[tokio::test]
async fn test_undecodable_body_is_transport_error() {
    let (base_url, _recorded) = spawn_upstream().await;
    let provider = YouTubeProvider::new(format!("{}/garbled", root_of(&base_url))).unwrap();

    let error = assert_err!(provider.search_videos("rust", 5, "secret").await);
    match error {
        AppError::HttpClient(e) => assert!(!e.to_string().contains("secret")),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_through_router_is_generic_bad_gateway() {
    let (base_url, _recorded) = spawn_upstream().await;
    let provider = YouTubeProvider::with_timeout(
        format!("{}/slow", root_of(&base_url)),
        Duration::from_millis(200),
    )
    .unwrap();
    let config = Config {
        yt_api_key: Some("super-secret-key".to_string()),
        ..Config::default()
    };
    let state = AppState::new(config, Arc::new(provider), DataStoreHandle::Absent);
    let server = axum_test::TestServer::new(create_router(state)).unwrap();

    let response = server
        .get("/api/youtube/search")
        .add_query_param("q", "rust")
        .await;
    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<serde_json::Value>(), json!({ "error": UPSTREAM_UNREACHABLE }));
    assert!(!response.text().contains("super-secret-key"));
}
