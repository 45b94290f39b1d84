/// Spotify Web API provider
///
/// Supplies seed artists (the user's top artists) and resolves free-form
/// artist names to catalog records through the search endpoint. Every call is
/// made on behalf of the caller using their bearer token.
///
/// API Flow:
/// 1. Seeds: /v1/me/top/artists → ranked artist records
/// 2. Resolution: /v1/search?type=artist&limit=1 → best matching record
use crate::{
    error::{AppError, AppResult},
    models::{Artist, AuthContext, SpotifySearchResponse, SpotifyTopArtists, TimeRange},
    services::providers::{CatalogSearchSource, SeedProvider},
};
use reqwest::{Client as HttpClient, StatusCode};
use std::time::Duration;

const TOP_ARTISTS_FAILED: &str = "Failed to fetch top artists";

#[derive(Clone)]
pub struct SpotifyProvider {
    http_client: HttpClient,
    api_url: String,
    seed_limit: usize,
}

impl SpotifyProvider {
    /// Creates a provider whose requests give up after `request_timeout`
    pub fn new(api_url: String, seed_limit: usize, request_timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(request_timeout).build()?;

        Ok(Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
            seed_limit,
        })
    }

    async fn fetch_top_artists(
        &self,
        auth: &AuthContext,
        time_range: TimeRange,
    ) -> AppResult<Vec<Artist>> {
        let url = format!("{}/v1/me/top/artists", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(auth.access_token())
            .query(&[
                ("limit", self.seed_limit.to_string()),
                ("time_range", time_range.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Spotify top artists request failed");
                AppError::Upstream(TOP_ARTISTS_FAILED.to_string())
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::Unauthenticated("Token expired".to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                "Spotify top artists returned an error status"
            );
            return Err(AppError::Upstream(TOP_ARTISTS_FAILED.to_string()));
        }

        let top: SpotifyTopArtists = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse Spotify top artists response");
            AppError::Upstream(TOP_ARTISTS_FAILED.to_string())
        })?;

        tracing::info!(
            seeds = top.items.len(),
            time_range = %time_range,
            provider = "spotify",
            "Top artists fetched"
        );

        Ok(top.items)
    }

    async fn search_artist(&self, name: &str, auth: &AuthContext) -> AppResult<Option<Artist>> {
        let url = format!("{}/v1/search", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(auth.access_token())
            .query(&[("q", name), ("type", "artist"), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Spotify search returned status {}",
                response.status()
            )));
        }

        let search: SpotifySearchResponse = response.json().await?;
        Ok(search.artists.items.into_iter().next())
    }
}

#[async_trait::async_trait]
impl SeedProvider for SpotifyProvider {
    async fn get_seeds(
        &self,
        auth: &AuthContext,
        time_range: TimeRange,
    ) -> AppResult<Vec<Artist>> {
        if auth.access_token().trim().is_empty() {
            return Err(AppError::Unauthenticated("Not authenticated".to_string()));
        }

        self.fetch_top_artists(auth, time_range).await
    }
}

#[async_trait::async_trait]
impl CatalogSearchSource for SpotifyProvider {
    async fn search_best(&self, name: &str, auth: &AuthContext) -> Option<Artist> {
        match self.search_artist(name, auth).await {
            Ok(artist) => {
                if artist.is_none() {
                    tracing::debug!(name = %name, "No Spotify match for artist");
                }
                artist
            }
            Err(e) => {
                tracing::warn!(name = %name, error = %e, "Spotify search failed");
                None
            }
        }
    }
}
