use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{ArtistPoolResponse, AuthContext},
    routes::AppState,
};

/// Handler for the artist pool endpoint
pub async fn artist_pool(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    auth: AuthContext,
) -> AppResult<Json<ArtistPoolResponse>> {
    tracing::info!(request_id = %request_id, "Building artist pool");

    let artists = state.artist_pool.build_artist_pool(&auth).await?;

    tracing::info!(
        request_id = %request_id,
        artists = artists.len(),
        "Artist pool ready"
    );

    Ok(Json(ArtistPoolResponse { artists }))
}
