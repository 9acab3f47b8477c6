use std::sync::Arc;
use std::time::Duration;

use spark_config::RelayConfig;
use spark_github::{RepoRef, SparkSource};

use crate::cache::{ListingCache, PrCache};
use crate::error::RelayError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn SparkSource>,
    pub config: Arc<RelayConfig>,
    pub listings: Arc<ListingCache>,
    pub prs: Arc<PrCache>,
}

impl AppState {
    pub fn new(source: Arc<dyn SparkSource>, config: RelayConfig) -> Self {
        let ttl = Duration::from_secs(config.cache_ttl_secs);
        Self {
            source,
            config: Arc::new(config),
            listings: Arc::new(ListingCache::new(ttl)),
            prs: Arc::new(PrCache::new(ttl)),
        }
    }

    /// The requested repository, or the configured default.
    pub fn repo(&self, requested: Option<&str>) -> Result<RepoRef, RelayError> {
        let input = requested
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(&self.config.default_repo);
        Ok(RepoRef::parse(input)?)
    }

    pub fn branch<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(&self.config.default_branch)
    }
}
