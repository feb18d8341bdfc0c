/// Network adapters for the dependency server
mod caching_client;
mod http_client;

pub use caching_client::CachingDependencySource;
pub use http_client::{HttpDependencySource, DEFAULT_ENDPOINT};
