use crate::search::SearchEngine;
use crate::server::handlers::{health, panic_response, search_get, search_options, search_post};
use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

const CACHE_CONTROL: &str = "s-maxage=60, stale-while-revalidate=300";

/// Builds the HTTP router around a shared engine
///
/// # Arguments
///
/// * `engine` - Search engine shared by every request
///
/// # Returns
///
/// A router serving `/api/search` and `/health` with CORS, tracing,
/// panic recovery and the `Cache-Control` header applied
pub fn build_router(engine: Arc<SearchEngine>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/search",
            get(search_get).post(search_post).options(search_options),
        )
        .route("/health", get(health))
        .with_state(engine)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
