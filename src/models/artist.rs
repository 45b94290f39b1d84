use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical artist record as known by the catalog service
///
/// Serializes with the catalog's own field names so clients can consume it
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// Stable catalog identifier
    pub id: String,
    /// Display name, not unique across artists
    pub name: String,
    #[serde(default)]
    pub images: Vec<ArtistImage>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistImage {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

impl Artist {
    /// Creates a bare record with no images or genres
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            external_urls: ExternalUrls {
                spotify: format!("https://open.spotify.com/artist/{}", id),
            },
            id,
            name: name.into(),
            images: Vec::new(),
            genres: Vec::new(),
            popularity: 0,
        }
    }
}

/// Deduplicated collection of artists keyed by catalog id
#[derive(Debug, Clone, Default)]
pub struct ArtistPool {
    artists: HashMap<String, Artist>,
}

impl ArtistPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an artist, replacing any record already stored under its id
    pub fn insert(&mut self, artist: Artist) -> Option<Artist> {
        self.artists.insert(artist.id.clone(), artist)
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Consumes the pool, yielding artists in arbitrary order
    pub fn into_artists(self) -> Vec<Artist> {
        self.artists.into_values().collect()
    }
}
