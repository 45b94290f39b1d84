/// Last.fm API provider
///
/// Answers "which artists are similar to this one" through `artist.getSimilar`.
/// The similarity graph is best-effort data: any failure is logged and turned
/// into an empty answer so one bad lookup never sinks a whole expansion.
use crate::{
    error::{AppError, AppResult},
    models::LastfmSimilarResponse,
    services::providers::SimilaritySource,
};
use reqwest::Client as HttpClient;
use std::time::Duration;

#[derive(Clone)]
pub struct LastfmProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl LastfmProvider {
    pub fn new(api_key: String, api_url: String, request_timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(request_timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
        })
    }

    /// Calls artist.getSimilar and returns the similar names in rank order
    async fn fetch_similar(&self, name: &str, limit: usize) -> AppResult<Vec<String>> {
        let limit = limit.to_string();

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("method", "artist.getSimilar"),
                ("artist", name),
                ("api_key", self.api_key.as_str()),
                ("format", "json"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Last.fm API returned status {}",
                response.status()
            )));
        }

        let body: LastfmSimilarResponse = response.json().await?;

        if let Some(code) = body.error {
            let message = body.message.unwrap_or_default();
            tracing::error!(
                artist = %name,
                code = code,
                message = %message,
                "Last.fm reported an error"
            );
            return Ok(Vec::new());
        }

        Ok(body
            .similarartists
            .map(|similar| similar.artist.into_iter().map(|a| a.name).collect())
            .unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl SimilaritySource for LastfmProvider {
    async fn get_similar(&self, name: &str, limit: usize) -> Vec<String> {
        match self.fetch_similar(name, limit).await {
            Ok(names) => {
                tracing::debug!(
                    artist = %name,
                    similar = names.len(),
                    provider = "lastfm",
                    "Similar artists fetched"
                );
                names
            }
            Err(e) => {
                tracing::warn!(artist = %name, error = %e, "Similar artist lookup failed");
                Vec::new()
            }
        }
    }
}
