use crate::graph_building::domain::{EdgeRecord, GraphQuery};
use crate::shared::Result;
use async_trait::async_trait;

/// DependencySource port for fetching edge records
///
/// This port abstracts the dependency server queried with
/// `GET /nodes?min_count=<n>&view=<v>`.
///
/// # Async Support
/// Implementations must be `Send + Sync` so fetches can run on spawned tasks
/// while the control session keeps reading input.
#[async_trait]
pub trait DependencySource: Send + Sync {
    /// Fetches the edge records matching the query
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The server returns an error status code
    /// - The response body is not a JSON array of edge records
    async fn fetch_edges(&self, query: &GraphQuery) -> Result<Vec<EdgeRecord>>;
}
