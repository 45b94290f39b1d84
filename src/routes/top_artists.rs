use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{AuthContext, TopArtistsResponse},
    routes::AppState,
};

/// Handler for the top artists endpoint
pub async fn top_artists(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
) -> AppResult<Json<TopArtistsResponse>> {
    let items = state.artist_pool.top_artists(&auth).await?;
    Ok(Json(TopArtistsResponse { items }))
}
