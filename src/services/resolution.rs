use std::sync::Arc;

use tokio::time::Instant;

use crate::{
    models::{Artist, AuthContext},
    services::{fan_out::TaskGroup, providers::CatalogSearchSource},
};

/// Maps candidate names back to catalog records
#[derive(Clone)]
pub struct CatalogResolver {
    catalog: Arc<dyn CatalogSearchSource>,
    tasks: TaskGroup,
}

impl CatalogResolver {
    pub fn new(catalog: Arc<dyn CatalogSearchSource>, tasks: TaskGroup) -> Self {
        Self { catalog, tasks }
    }

    /// Copy of this resolver whose lookups stop at `deadline`
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        Self {
            tasks: self.tasks.with_deadline(deadline),
            ..self.clone()
        }
    }

    /// Best catalog record for a single name, `None` when unresolved
    pub async fn resolve(&self, name: &str, auth: &AuthContext) -> Option<Artist> {
        self.catalog.search_best(name, auth).await
    }

    /// Resolves every name concurrently, one result per input name
    pub async fn resolve_all<I>(&self, names: I, auth: &AuthContext) -> Vec<Option<Artist>>
    where
        I: IntoIterator<Item = String>,
    {
        let tasks: Vec<_> = names
            .into_iter()
            .map(|name| {
                let resolver = self.clone();
                let auth = auth.clone();
                async move { resolver.resolve(&name, &auth).await }
            })
            .collect();

        let results: Vec<Option<Artist>> = self
            .tasks
            .run("catalog_search", tasks)
            .await
            .into_iter()
            .map(Option::flatten)
            .collect();

        let resolved = results.iter().filter(|r| r.is_some()).count();
        tracing::info!(
            candidates = results.len(),
            resolved = resolved,
            unresolved = results.len() - resolved,
            "Catalog resolution completed"
        );

        results
    }
}
