use std::sync::Arc;

use artist_pool_api::{
    config::Config,
    routes::{create_router, AppState},
    services::{
        providers::{LastfmProvider, SpotifyProvider},
        ArtistPoolService,
    },
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("artist_pool_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let spotify = Arc::new(SpotifyProvider::new(
        config.spotify_api_url.clone(),
        config.seed_limit,
        config.request_timeout(),
    )?);
    let lastfm = Arc::new(LastfmProvider::new(
        config.lastfm_api_key.clone(),
        config.lastfm_api_url.clone(),
        config.request_timeout(),
    )?);

    let artist_pool = ArtistPoolService::from_config(&config, spotify.clone(), lastfm, spotify);
    let app = create_router(Arc::new(AppState::new(artist_pool)));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        address = %address,
        max_concurrent_requests = config.max_concurrent_requests,
        "Server running"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
