use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use depgraph_view::prelude::*;

/// Mock DependencySource serving canned edge records per query
#[derive(Default)]
pub struct MockDependencySource {
    pub responses: HashMap<GraphQuery, Vec<EdgeRecord>>,
    pub delays: HashMap<GraphQuery, Duration>,
    pub should_fail: bool,
    call_count: AtomicUsize,
}

impl MockDependencySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, query: GraphQuery, records: Vec<EdgeRecord>) -> Self {
        self.responses.insert(query, records);
        self
    }

    pub fn with_delay(mut self, query: GraphQuery, delay: Duration) -> Self {
        self.delays.insert(query, delay);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DependencySource for MockDependencySource {
    async fn fetch_edges(&self, query: &GraphQuery) -> Result<Vec<EdgeRecord>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        if self.should_fail {
            anyhow::bail!("Mock dependency source failure");
        }

        Ok(self.responses.get(query).cloned().unwrap_or_default())
    }
}
