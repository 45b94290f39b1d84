use serde::Deserialize;
use std::time::Duration;

use crate::models::TimeRange;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Last.fm API key used for similar-artist lookups
    pub lastfm_api_key: String,

    /// Last.fm API base URL
    #[serde(default = "default_lastfm_api_url")]
    pub lastfm_api_url: String,

    /// Spotify Web API base URL
    #[serde(default = "default_spotify_api_url")]
    pub spotify_api_url: String,

    /// Number of top artists used as seeds
    #[serde(default = "default_limit")]
    pub seed_limit: usize,

    /// Number of similar artists requested per lookup
    #[serde(default = "default_limit")]
    pub similar_limit: usize,

    /// Listening window for seed artists
    #[serde(default = "default_seed_time_range")]
    pub seed_time_range: TimeRange,

    /// Cap on in-flight upstream calls, 0 disables the cap
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    /// Deadline for a single upstream call
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Deadline for expansion and resolution of one pool
    #[serde(default = "default_pipeline_timeout_secs")]
    pub pipeline_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_lastfm_api_url() -> String {
    "https://ws.audioscrobbler.com/2.0/".to_string()
}

fn default_spotify_api_url() -> String {
    "https://api.spotify.com".to_string()
}

fn default_limit() -> usize {
    10
}

fn default_seed_time_range() -> TimeRange {
    TimeRange::MediumTerm
}

fn default_max_concurrent_requests() -> usize {
    32
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_pipeline_timeout_secs() -> u64 {
    60
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn pipeline_timeout(&self) -> Duration {
        Duration::from_secs(self.pipeline_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
