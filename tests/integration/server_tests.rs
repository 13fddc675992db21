//! HTTP router behaviour, driven with `oneshot` requests

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use bubble_search::config::{CacheConfig, ServerConfig};
use bubble_search::search::{ResultOrigin, ResultSource, SearchEngine, SearchResult, SourceResults};
use bubble_search::server::build_router;
use bubble_search::{QueryCache, SearchError};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Returns `limit` canned results; panics for the query "panic"
struct CannedSource;

#[async_trait]
impl ResultSource for CannedSource {
    async fn fetch_results(&self, query: &str, limit: usize) -> Result<SourceResults, SearchError> {
        if query == "panic" {
            panic!("source blew up");
        }
        if query == "fail" {
            return Err(SearchError::Internal("upstream unavailable".to_string()));
        }

        let results = (0..limit)
            .map(|i| SearchResult {
                title: format!("{} result {}", query, i),
                url: format!("https://example.com/{}", i),
                snippet: "Snippet...".to_string(),
            })
            .collect();
        Ok(SourceResults::new(results, ResultOrigin::Ranked))
    }
}

fn app() -> Router {
    let engine = SearchEngine::new(
        Arc::new(CannedSource),
        QueryCache::new(&CacheConfig::default()),
        &ServerConfig::default(),
    );
    build_router(Arc::new(engine))
}

async fn send(request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_missing_query_is_bad_request() {
    let (status, _, json) = send(get("/api/search")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Query parameter required");
    assert_eq!(json["results"], Value::Array(vec![]));
}

#[tokio::test]
async fn test_blank_query_is_bad_request() {
    let (status, _, _) = send(get("/api/search?query=%20%20")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_search_uses_default_limit() {
    let (status, headers, json) = send(get("/api/search?query=rust")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["query"], "rust");
    assert_eq!(json["count"], 15);
    assert_eq!(json["results"].as_array().unwrap().len(), 15);
    assert!(json["timestamp"].as_str().is_some());
    assert_eq!(
        headers[header::CACHE_CONTROL],
        "s-maxage=60, stale-while-revalidate=300"
    );
}

#[tokio::test]
async fn test_limit_is_clamped() {
    let (_, _, json) = send(get("/api/search?query=rust&limit=500")).await;
    assert_eq!(json["count"], 20);

    let (_, _, json) = send(get("/api/search?query=rust&limit=0")).await;
    assert_eq!(json["count"], 1);

    let (_, _, json) = send(get("/api/search?query=rust&limit=abc")).await;
    assert_eq!(json["count"], 15);
}

#[tokio::test]
async fn test_post_json_body() {
    let request = Request::post("/api/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"query": "tokio", "limit": 3}"#))
        .unwrap();
    let (status, _, json) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["query"], "tokio");
    assert_eq!(json["count"], 3);
    assert_eq!(json["results"][0]["title"], "tokio result 0");
}

#[tokio::test]
async fn test_post_query_string() {
    let request = Request::post("/api/search?query=axum&limit=2")
        .body(Body::empty())
        .unwrap();
    let (status, _, json) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
}

#[tokio::test]
async fn test_options_is_ok() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/search")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/search")
        .header(header::ORIGIN, "https://somewhere.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_source_error_is_internal_error() {
    let (status, _, json) = send(get("/api/search?query=fail")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["results"], Value::Array(vec![]));
}

#[tokio::test]
async fn test_panic_is_internal_error() {
    let (status, _, json) = send(get("/api/search?query=panic")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_health() {
    let (status, _, json) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}
