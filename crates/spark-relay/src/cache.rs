//! TTL caches in front of the upstream source.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use spark_core::responses::{OpenPullRequests, SparkFile};
use spark_github::GithubError;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Repository listings keyed by `owner/repo:branch`.
pub type ListingCache = TtlCache<Vec<SparkFile>>;

/// Open pull requests keyed by `owner/repo:path`.
pub type PrCache = TtlCache<OpenPullRequests>;

/// How a cached lookup was satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup<V> {
    pub value: V,
    /// Served without contacting upstream.
    pub cached: bool,
    /// Upstream failed; `value` is the last good entry and this is the failure.
    pub stale: Option<String>,
}

struct Entry<V> {
    value: V,
    stored_at: Instant,
}

/// Expired entries stay available as stale fallbacks for this many TTLs.
const STALE_RETENTION_TTLS: u32 = 10;

const DEFAULT_MAX_ENTRIES: usize = 1024;

/// Keyed values that expire after a fixed TTL.
///
/// Expired entries are kept for a while so a failed refresh can still serve
/// them. Each insert drops entries past that window and, above `max_entries`,
/// the oldest ones.
pub struct TtlCache<V> {
    ttl: Duration,
    max_entries: usize,
    entries: RwLock<HashMap<String, Entry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::with_max_entries(ttl, DEFAULT_MAX_ENTRIES)
    }

    #[must_use]
    pub fn with_max_entries(ttl: Duration, max_entries: usize) -> Self {
        Self {
            ttl,
            max_entries: max_entries.max(1),
            entries: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The value for `key` if it is younger than the TTL.
    pub async fn fresh(&self, key: &str) -> Option<V> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    pub async fn insert(&self, key: String, value: V) {
        let mut entries = self.entries.write().await;
        let retention = self.ttl.saturating_mul(STALE_RETENTION_TTLS);
        entries.retain(|_, entry| entry.stored_at.elapsed() <= retention);
        entries.remove(&key);
        while entries.len() >= self.max_entries {
            let Some(oldest) = entries
                .iter()
                .min_by_key(|(_, entry)| entry.stored_at)
                .map(|(key, _)| key.clone())
            else {
                break;
            };
            entries.remove(&oldest);
        }
        entries.insert(
            key,
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn invalidate(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    /// Serve `key` from cache, or refresh it with `fetch`.
    ///
    /// A failed refresh falls back to the expired entry when one exists.
    ///
    /// # Errors
    ///
    /// Returns the fetch error when there is nothing cached for `key`.
    pub async fn get_or_refresh<F, Fut>(&self, key: &str, fetch: F) -> Result<Lookup<V>, GithubError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, GithubError>>,
    {
        if let Some(value) = self.fresh(key).await {
            tracing::debug!(key, "cache hit");
            return Ok(Lookup {
                value,
                cached: true,
                stale: None,
            });
        }

        match fetch().await {
            Ok(value) => {
                self.insert(key.to_string(), value.clone()).await;
                Ok(Lookup {
                    value,
                    cached: false,
                    stale: None,
                })
            }
            Err(e) => {
                let entries = self.entries.read().await;
                let Some(entry) = entries.get(key) else {
                    return Err(e);
                };
                tracing::warn!(key, %e, "upstream failed, serving stale entry");
                Ok(Lookup {
                    value: entry.value.clone(),
                    cached: true,
                    stale: Some(e.to_string()),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn upstream_down() -> GithubError {
        GithubError::RateLimited {
            retry_after_secs: 60,
        }
    }

    #[tokio::test]
    async fn fresh_entry_skips_upstream() {
        let cache = TtlCache::new(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);
        for _ in 0..3 {
            let lookup = cache
                .get_or_refresh("acme/ideas:main", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![1, 2])
                })
                .await
                .unwrap();
            assert_eq!(lookup.value, vec![1, 2]);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("acme/ideas:main".into(), 1).await;
        assert_eq!(cache.fresh("acme/ideas:dev").await, None);
        assert_eq!(cache.fresh("acme/ideas:main").await, Some(1));
    }

    #[tokio::test]
    async fn expired_entry_is_refreshed() {
        let cache = TtlCache::new(Duration::ZERO);
        cache.insert("k".into(), 1).await;
        let lookup = cache.get_or_refresh("k", || async { Ok(2) }).await.unwrap();
        assert_eq!(lookup.value, 2);
        assert!(!lookup.cached);
    }

    #[tokio::test]
    async fn failed_refresh_serves_stale_entry() {
        let cache = TtlCache::new(Duration::ZERO);
        cache.insert("k".into(), 1).await;
        let lookup = cache
            .get_or_refresh("k", || async { Err(upstream_down()) })
            .await
            .unwrap();
        assert_eq!(lookup.value, 1);
        assert!(lookup.cached);
        assert!(lookup.stale.unwrap().contains("rate limit"));
    }

    #[tokio::test]
    async fn failure_without_entry_is_an_error() {
        let cache: TtlCache<u8> = TtlCache::new(Duration::from_secs(60));
        let err = cache
            .get_or_refresh("k", || async { Err(upstream_down()) })
            .await
            .unwrap_err();
        assert!(matches!(err, GithubError::RateLimited { .. }));
    }

    #[tokio::test]
    async fn invalidate_forgets_the_key() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("k".into(), 1).await;
        cache.invalidate("k").await;
        assert_eq!(cache.fresh("k").await, None);
    }

    #[tokio::test]
    async fn oldest_entry_is_evicted_at_capacity() {
        let cache = TtlCache::with_max_entries(Duration::from_secs(60), 2);
        for key in ["a", "b", "c"] {
            cache.insert(key.into(), 1).await;
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        assert_eq!(cache.len().await, 2);
        assert_eq!(cache.fresh("a").await, None);
        assert_eq!(cache.fresh("c").await, Some(1));
    }

    #[tokio::test]
    async fn long_expired_entries_are_dropped_on_insert() {
        let cache = TtlCache::new(Duration::from_millis(1));
        cache.insert("old".into(), 1).await;
        tokio::time::sleep(Duration::from_millis(30)).await;
        cache.insert("new".into(), 2).await;
        assert_eq!(cache.len().await, 1);
        let err = cache
            .get_or_refresh("old", || async { Err(upstream_down()) })
            .await
            .unwrap_err();
        assert!(matches!(err, GithubError::RateLimited { .. }));
    }

    #[tokio::test]
    async fn reinserting_a_key_does_not_evict_others() {
        let cache = TtlCache::with_max_entries(Duration::from_secs(60), 2);
        cache.insert("a".into(), 1).await;
        cache.insert("b".into(), 1).await;
        cache.insert("b".into(), 2).await;
        assert_eq!(cache.fresh("a").await, Some(1));
        assert_eq!(cache.fresh("b").await, Some(2));
    }
}
