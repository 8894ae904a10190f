//! Timeline API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. Any origin may call the API.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::config::MAX_REQUEST_BYTES;

/// Build the timeline API router.
pub fn timeline_api_router() -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/analyze", post(endpoints::analyze::analyze))
        .route("/sample", get(endpoints::sample::sample));

    Router::new()
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
        .layer(CorsLayer::permissive())
}
