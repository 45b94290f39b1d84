#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use artist_pool_api::{
    error::{AppError, AppResult},
    models::{Artist, AuthContext, TimeRange},
    services::{
        expansion::SimilarityExpander,
        fan_out::TaskGroup,
        providers::{CatalogSearchSource, SeedProvider, SimilaritySource},
        resolution::CatalogResolver,
        ArtistPoolService,
    },
};

/// Seed source returning a fixed answer
pub enum FakeSeeds {
    Artists(Vec<Artist>),
    Unauthenticated,
    Unavailable,
}

#[async_trait::async_trait]
impl SeedProvider for FakeSeeds {
    async fn get_seeds(
        &self,
        _auth: &AuthContext,
        _time_range: TimeRange,
    ) -> AppResult<Vec<Artist>> {
        match self {
            FakeSeeds::Artists(artists) => Ok(artists.clone()),
            FakeSeeds::Unauthenticated => {
                Err(AppError::Unauthenticated("Token expired".to_string()))
            }
            FakeSeeds::Unavailable => {
                Err(AppError::Upstream("Failed to fetch top artists".to_string()))
            }
        }
    }
}

/// Similarity graph backed by a map, with optional per-name latency
#[derive(Default)]
pub struct FakeSimilarity {
    graph: HashMap<String, Vec<String>>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeSimilarity {
    pub fn new(edges: &[(&str, &[&str])]) -> Self {
        let graph = edges
            .iter()
            .map(|(from, to)| {
                (
                    from.to_string(),
                    to.iter().map(|name| name.to_string()).collect(),
                )
            })
            .collect();

        Self {
            graph,
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SimilaritySource for FakeSimilarity {
    async fn get_similar(&self, name: &str, limit: usize) -> Vec<String> {
        self.calls.lock().unwrap().push(name.to_string());

        if let Some(delay) = self.delays.get(name) {
            tokio::time::sleep(*delay).await;
        }

        self.graph
            .get(name)
            .map(|names| names.iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }
}

/// Catalog backed by a name → artist map, with optional per-name latency
#[derive(Default)]
pub struct FakeCatalog {
    records: HashMap<String, Artist>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn new(records: &[(&str, &str)]) -> Self {
        let records = records
            .iter()
            .map(|(name, id)| (name.to_string(), Artist::new(*id, *name)))
            .collect();

        Self {
            records,
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CatalogSearchSource for FakeCatalog {
    async fn search_best(&self, name: &str, _auth: &AuthContext) -> Option<Artist> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(name) {
            tokio::time::sleep(*delay).await;
        }

        self.records.get(name).cloned()
    }
}

pub fn build_service(
    seeds: FakeSeeds,
    similarity: Arc<FakeSimilarity>,
    catalog: Arc<FakeCatalog>,
) -> ArtistPoolService {
    build_service_with(seeds, similarity, catalog, Duration::from_secs(2))
}

pub fn build_service_with(
    seeds: FakeSeeds,
    similarity: Arc<FakeSimilarity>,
    catalog: Arc<FakeCatalog>,
    call_timeout: Duration,
) -> ArtistPoolService {
    build_service_limited(
        seeds,
        similarity,
        catalog,
        16,
        call_timeout,
        Duration::from_secs(10),
    )
}

pub fn build_service_limited(
    seeds: FakeSeeds,
    similarity: Arc<FakeSimilarity>,
    catalog: Arc<FakeCatalog>,
    max_in_flight: usize,
    call_timeout: Duration,
    pipeline_timeout: Duration,
) -> ArtistPoolService {
    let tasks = TaskGroup::new(max_in_flight, call_timeout);

    ArtistPoolService::new(
        Arc::new(seeds),
        SimilarityExpander::new(similarity, tasks.clone(), 10),
        CatalogResolver::new(catalog, tasks),
        TimeRange::MediumTerm,
        pipeline_timeout,
    )
}
