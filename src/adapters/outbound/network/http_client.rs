use crate::graph_building::domain::{EdgeRecord, GraphQuery};
use crate::ports::outbound::DependencySource;
use crate::shared::error::GraphError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Endpoint of the dependency server when none is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";

/// HttpDependencySource adapter for the `/nodes` endpoint of the dependency server
///
/// One request per call. There are no retries, and no timeout unless one is
/// configured.
pub struct HttpDependencySource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDependencySource {
    /// Creates a client for `endpoint` (scheme, host and optional path prefix)
    ///
    /// # Errors
    /// Returns an error if the endpoint is not an absolute http(s) URL or the
    /// HTTP client cannot be built
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = Self::normalize_endpoint(endpoint)?;

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("depgraph-view/{}", version);
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds `GET {endpoint}/nodes?min_count=<n>&view=<id>`
    pub fn nodes_url(&self, query: &GraphQuery) -> String {
        format!(
            "{}/nodes?min_count={}&view={}",
            self.endpoint,
            query.min_count,
            query.view.id()
        )
    }

    fn normalize_endpoint(endpoint: &str) -> Result<String> {
        let trimmed = endpoint.trim().trim_end_matches('/');
        let invalid = |details: &str| GraphError::InvalidEndpoint {
            url: endpoint.to_string(),
            details: details.to_string(),
        };

        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| invalid("URL must start with http:// or https://"))?;

        if rest.is_empty() || rest.starts_with('/') {
            return Err(invalid("URL has no host").into());
        }
        if trimmed.contains('?') || trimmed.contains('#') {
            return Err(invalid("URL must not contain a query string or fragment").into());
        }

        Ok(trimmed.to_string())
    }
}

#[async_trait]
impl DependencySource for HttpDependencySource {
    async fn fetch_edges(&self, query: &GraphQuery) -> Result<Vec<EdgeRecord>> {
        let url = self.nodes_url(query);
        tracing::debug!(%url, "requesting edge records");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GraphError::ServerStatus {
                url,
                status: response.status().as_u16(),
            }
            .into());
        }

        // The server encodes an empty result as `null`
        let records: Option<Vec<EdgeRecord>> = response.json().await?;
        Ok(records.unwrap_or_default())
    }
}
