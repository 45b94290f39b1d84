use axum::{
    http::{Method, StatusCode},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::ArtistPoolService,
};

pub mod artist_pool;
pub mod top_artists;

/// Shared state handed to every handler
pub struct AppState {
    pub artist_pool: ArtistPoolService,
}

impl AppState {
    pub fn new(artist_pool: ArtistPoolService) -> Self {
        Self { artist_pool }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET])
                        .allow_origin(Any),
                ),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/artist-pool", get(artist_pool::artist_pool))
        .route("/top-artists", get(top_artists::top_artists))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
