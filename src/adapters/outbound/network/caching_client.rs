use crate::graph_building::domain::{EdgeRecord, GraphQuery};
use crate::ports::outbound::DependencySource;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingDependencySource wraps a DependencySource and keeps responses in memory.
///
/// Keyed by the full query, so switching back to a previously viewed
/// `(min_count, view)` pair skips the network. The cache lives only as long as
/// the process. Failed fetches are not cached.
pub struct CachingDependencySource<S: DependencySource> {
    inner: S,
    cache: Arc<DashMap<GraphQuery, Vec<EdgeRecord>>>,
}

impl<S: DependencySource> CachingDependencySource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<S: DependencySource> DependencySource for CachingDependencySource<S> {
    async fn fetch_edges(&self, query: &GraphQuery) -> Result<Vec<EdgeRecord>> {
        if let Some(cached) = self.cache.get(query) {
            tracing::debug!(%query, "serving edge records from cache");
            return Ok(cached.clone());
        }

        let records = self.inner.fetch_edges(query).await?;
        self.cache.insert(*query, records.clone());

        Ok(records)
    }
}
