use std::collections::HashSet;
use std::sync::Arc;

use tokio::time::Instant;

use crate::services::{fan_out::TaskGroup, providers::SimilaritySource};

/// Two-level breadth-first walk over the similar-artist relation
///
/// Level 1 asks for names similar to each seed; level 2 asks for names
/// similar to each level-1 name. Names matching a seed (ignoring case) never
/// become candidates. Seeds are compared by name only, so two different
/// artists that share a name are treated as the same artist here.
#[derive(Clone)]
pub struct SimilarityExpander {
    source: Arc<dyn SimilaritySource>,
    tasks: TaskGroup,
    limit: usize,
}

impl SimilarityExpander {
    pub fn new(source: Arc<dyn SimilaritySource>, tasks: TaskGroup, limit: usize) -> Self {
        Self {
            source,
            tasks,
            limit,
        }
    }

    /// Copy of this expander whose queries stop at `deadline`
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        Self {
            tasks: self.tasks.with_deadline(deadline),
            ..self.clone()
        }
    }

    /// Expands seed names into the set of candidate names, seeds excluded
    pub async fn expand(&self, seeds: &[String]) -> HashSet<String> {
        let mut candidates = HashSet::new();
        if seeds.is_empty() {
            return candidates;
        }

        let excluded: HashSet<String> = seeds.iter().map(|name| name.to_lowercase()).collect();

        let mut queried: HashSet<&String> = HashSet::new();
        let seed_names: Vec<String> = seeds
            .iter()
            .filter(|name| queried.insert(*name))
            .cloned()
            .collect();

        let level1 = self.query_level("similar_level_1", seed_names).await;
        merge_excluding(&mut candidates, level1, &excluded);

        tracing::info!(
            seeds = seeds.len(),
            level1 = candidates.len(),
            "Level 1 expansion completed"
        );

        // Candidates can never equal a seed name, so each level-1 name is new.
        let level1_names: Vec<String> = candidates.iter().cloned().collect();
        let level2 = self.query_level("similar_level_2", level1_names).await;
        merge_excluding(&mut candidates, level2, &excluded);

        tracing::info!(candidates = candidates.len(), "Level 2 expansion completed");

        candidates
    }

    /// Queries every name concurrently; failed calls contribute nothing
    async fn query_level(&self, stage: &'static str, names: Vec<String>) -> Vec<Vec<String>> {
        let tasks: Vec<_> = names
            .into_iter()
            .map(|name| {
                let source = Arc::clone(&self.source);
                let limit = self.limit;
                async move { source.get_similar(&name, limit).await }
            })
            .collect();

        self.tasks
            .run(stage, tasks)
            .await
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect()
    }
}

fn merge_excluding(
    candidates: &mut HashSet<String>,
    results: Vec<Vec<String>>,
    excluded: &HashSet<String>,
) {
    for name in results.into_iter().flatten() {
        if !excluded.contains(&name.to_lowercase()) {
            candidates.insert(name);
        }
    }
}
