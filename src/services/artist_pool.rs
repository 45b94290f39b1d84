use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::{
    config::Config,
    error::AppResult,
    models::{Artist, AuthContext, TimeRange},
    services::{
        expansion::SimilarityExpander,
        fan_out::TaskGroup,
        pool,
        providers::{CatalogSearchSource, SeedProvider, SimilaritySource},
        resolution::CatalogResolver,
        shuffle::shuffle,
    },
};

/// Builds a shuffled pool of artists around a user's favorites
///
/// The pipeline runs four stages with a full join between each:
/// 1. Fetch the user's top artists as seeds (the only stage that can fail)
/// 2. Expand seed names two levels deep through the similarity relation
/// 3. Resolve every candidate name to a catalog record
/// 4. Merge seeds and resolved records by catalog id, then shuffle
#[derive(Clone)]
pub struct ArtistPoolService {
    seeds: Arc<dyn SeedProvider>,
    expander: SimilarityExpander,
    resolver: CatalogResolver,
    seed_time_range: TimeRange,
    pipeline_timeout: Duration,
}

impl ArtistPoolService {
    pub fn new(
        seeds: Arc<dyn SeedProvider>,
        expander: SimilarityExpander,
        resolver: CatalogResolver,
        seed_time_range: TimeRange,
        pipeline_timeout: Duration,
    ) -> Self {
        Self {
            seeds,
            expander,
            resolver,
            seed_time_range,
            pipeline_timeout,
        }
    }

    /// Wires the pipeline from configuration, sharing one concurrency cap
    /// between expansion and resolution
    pub fn from_config(
        config: &Config,
        seeds: Arc<dyn SeedProvider>,
        similarity: Arc<dyn SimilaritySource>,
        catalog: Arc<dyn CatalogSearchSource>,
    ) -> Self {
        let tasks = TaskGroup::new(config.max_concurrent_requests, config.request_timeout());

        Self::new(
            seeds,
            SimilarityExpander::new(similarity, tasks.clone(), config.similar_limit),
            CatalogResolver::new(catalog, tasks),
            config.seed_time_range,
            config.pipeline_timeout(),
        )
    }

    /// Returns the final shuffled pool for the caller
    ///
    /// Fails only when the seed fetch fails; similarity and search failures
    /// shrink the pool instead. Calls still outstanding when the pipeline
    /// deadline passes count as empty, so the seeds are always returned.
    pub async fn build_artist_pool(&self, auth: &AuthContext) -> AppResult<Vec<Artist>> {
        let start = Instant::now();

        let seeds = self.seeds.get_seeds(auth, self.seed_time_range).await?;

        let deadline = Instant::now() + self.pipeline_timeout;
        let mut artists = self.grow_pool(seeds, auth, deadline).await;

        if Instant::now() >= deadline {
            tracing::warn!(
                timeout_secs = self.pipeline_timeout.as_secs(),
                artists = artists.len(),
                "Pipeline deadline reached, returning pool from completed calls"
            );
        }

        shuffle(&mut artists, &mut rand::rng());

        tracing::info!(
            artists = artists.len(),
            processing_time_ms = start.elapsed().as_millis() as u64,
            "Artist pool built"
        );

        Ok(artists)
    }

    /// Expansion, resolution and merge for an already fetched seed set
    async fn grow_pool(
        &self,
        seeds: Vec<Artist>,
        auth: &AuthContext,
        deadline: Instant,
    ) -> Vec<Artist> {
        let seed_names: Vec<String> = seeds.iter().map(|a| a.name.clone()).collect();

        let candidates = self
            .expander
            .with_deadline(deadline)
            .expand(&seed_names)
            .await;
        let resolved = self
            .resolver
            .with_deadline(deadline)
            .resolve_all(candidates, auth)
            .await;

        let pool = pool::assemble(seeds, resolved);
        tracing::info!(
            seeds = seed_names.len(),
            pool = pool.len(),
            "Artist pool assembled"
        );

        pool.into_artists()
    }

    /// The user's long-term favorites, straight from the seed source
    pub async fn top_artists(&self, auth: &AuthContext) -> AppResult<Vec<Artist>> {
        self.seeds.get_seeds(auth, TimeRange::LongTerm).await
    }
}
