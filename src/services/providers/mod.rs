/// Upstream data sources for the artist pool
///
/// The pipeline talks to three collaborators: a seed source for the user's top
/// artists, a similarity source that maps a name to related names, and a
/// catalog search that maps a name back to a canonical record. Only the seed
/// source may fail a request; the other two absorb their own failures.
use crate::{
    error::AppResult,
    models::{Artist, AuthContext, TimeRange},
};

pub mod lastfm;
pub mod spotify;

pub use lastfm::LastfmProvider;
pub use spotify::SpotifyProvider;

/// Source of seed artists for a user
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SeedProvider: Send + Sync {
    /// Fetch the user's top artists for the given listening window
    ///
    /// Returns `AppError::Unauthenticated` when the credential is missing or
    /// expired and `AppError::Upstream` for every other failure.
    async fn get_seeds(&self, auth: &AuthContext, time_range: TimeRange)
        -> AppResult<Vec<Artist>>;
}

/// Similar-artist relation
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SimilaritySource: Send + Sync {
    /// Names similar to `name`, at most `limit` of them
    ///
    /// Never fails: transport errors, service errors and malformed payloads
    /// all come back as an empty list.
    async fn get_similar(&self, name: &str, limit: usize) -> Vec<String>;
}

/// Catalog search returning the single best match for a name
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSearchSource: Send + Sync {
    /// Best catalog match for `name`, or `None` when nothing usable came back
    async fn search_best(&self, name: &str, auth: &AuthContext) -> Option<Artist>;
}
