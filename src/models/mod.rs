use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod artist;
pub mod auth;

pub use artist::{Artist, ArtistImage, ArtistPool, ExternalUrls};
pub use auth::AuthContext;

/// Listening window used when ranking a user's top artists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Response body of the artist pool endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ArtistPoolResponse {
    pub artists: Vec<Artist>,
}

/// Response body of the top artists endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct TopArtistsResponse {
    pub items: Vec<Artist>,
}

// ============================================================================
// Spotify Web API Types
// ============================================================================

/// API response from GET /v1/me/top/artists
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTopArtists {
    #[serde(default)]
    pub items: Vec<Artist>,
}

/// API response from GET /v1/search?type=artist
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifySearchResponse {
    pub artists: SpotifyArtistPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyArtistPage {
    #[serde(default)]
    pub items: Vec<Artist>,
}

// ============================================================================
// Last.fm API Types
// ============================================================================

/// API response from artist.getSimilar
///
/// Last.fm reports failures with a 200 status and an `error` code in the body,
/// so both shapes deserialize into this struct.
#[derive(Debug, Clone, Deserialize)]
pub struct LastfmSimilarResponse {
    #[serde(default)]
    pub similarartists: Option<LastfmSimilarArtists>,
    #[serde(default)]
    pub error: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastfmSimilarArtists {
    #[serde(default)]
    pub artist: Vec<LastfmArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastfmArtist {
    pub name: String,
}
