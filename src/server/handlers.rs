//! Route handlers

use crate::search::SearchEngine;
use crate::server::types::{ErrorResponse, SearchParams, SearchResponse};
use crate::SearchError;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Failures surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Query parameter required")]
    MissingQuery,

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingQuery => StatusCode::BAD_REQUEST,
            ApiError::Search(e) => {
                tracing::warn!("Search failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// `GET /api/search?query=...&limit=...`
pub async fn search_get(
    State(engine): State<Arc<SearchEngine>>,
    Query(query_string): Query<HashMap<String, String>>,
) -> Result<Json<SearchResponse>, ApiError> {
    run_search(&engine, SearchParams::from_query_string(&query_string)).await
}

/// `POST /api/search` with parameters in the query string or a JSON body
pub async fn search_post(
    State(engine): State<Arc<SearchEngine>>,
    Query(query_string): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<Json<SearchResponse>, ApiError> {
    let params = SearchParams::from_query_string(&query_string)
        .or(SearchParams::from_json_body(&body));
    run_search(&engine, params).await
}

/// `OPTIONS /api/search`
pub async fn search_options() -> StatusCode {
    StatusCode::OK
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn run_search(
    engine: &SearchEngine,
    params: SearchParams,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params.query.clone().ok_or(ApiError::MissingQuery)?;
    let limit = params.limit_or(engine.default_limit());

    let results = engine.search(&query, limit).await?;
    Ok(Json(SearchResponse::new(query, results)))
}

/// Turns a handler panic into the JSON 500 body
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::warn!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal server error")),
    )
        .into_response()
}
