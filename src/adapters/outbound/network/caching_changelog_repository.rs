use crate::ports::outbound::ChangelogRepository;
use crate::remediation::domain::ChangelogEntry;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for release notes
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    ga: String,
    version: String,
}

impl CacheKey {
    fn new(ga: &str, version: &str) -> Self {
        Self {
            ga: ga.to_string(),
            version: version.to_string(),
        }
    }
}

/// CachingChangelogRepository wraps a ChangelogRepository and adds in-memory caching.
///
/// Both outcomes of a successful lookup are cached: a found entry and a
/// confirmed "no release notes". Errors are not cached, so a transient
/// failure is retried the next time the same version is requested.
///
/// The advisor asks for the same `(ga, version)` pair several times per run
/// (prefetch, then again when the model calls `get_changelog`), which is why
/// this decorator sits in front of the network client.
pub struct CachingChangelogRepository<R: ChangelogRepository> {
    inner: R,
    cache: Arc<DashMap<CacheKey, Option<ChangelogEntry>>>,
}

impl<R: ChangelogRepository> CachingChangelogRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: ChangelogRepository> ChangelogRepository for CachingChangelogRepository<R> {
    async fn fetch_changelog(&self, ga: &str, version: &str) -> Result<Option<ChangelogEntry>> {
        let key = CacheKey::new(ga, version);

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let entry = self.inner.fetch_changelog(ga, version).await?;
        self.cache.insert(key, entry.clone());

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns an entry for versions ending in ".0", nothing otherwise,
    /// and fails for "error"
    struct MockChangelogRepository {
        call_count: AtomicUsize,
    }

    impl MockChangelogRepository {
        fn new() -> Self {
            Self {
                call_count: AtomicUsize::new(0),
            }
        }

        fn get_call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChangelogRepository for MockChangelogRepository {
        async fn fetch_changelog(
            &self,
            _ga: &str,
            version: &str,
        ) -> Result<Option<ChangelogEntry>> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if version == "error" {
                anyhow::bail!("rate limited");
            }
            if version.ends_with(".0") {
                return Ok(Some(ChangelogEntry {
                    version: version.to_string(),
                    summary: format!("Release {}", version),
                    ..Default::default()
                }));
            }
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_caching_repository_returns_cached_value() {
        let repo = CachingChangelogRepository::new(MockChangelogRepository::new());

        let first = repo.fetch_changelog("g:a", "2.0.0").await.unwrap();
        let second = repo.fetch_changelog("g:a", "2.0.0").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(repo.inner.get_call_count(), 1);
        assert_eq!(repo.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_caching_repository_caches_not_found() {
        let repo = CachingChangelogRepository::new(MockChangelogRepository::new());

        assert!(repo.fetch_changelog("g:a", "2.0.1").await.unwrap().is_none());
        assert!(repo.fetch_changelog("g:a", "2.0.1").await.unwrap().is_none());

        assert_eq!(repo.inner.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_caching_repository_distinguishes_keys() {
        let repo = CachingChangelogRepository::new(MockChangelogRepository::new());

        repo.fetch_changelog("g:a", "2.0.0").await.unwrap();
        repo.fetch_changelog("g:a", "3.0.0").await.unwrap();
        repo.fetch_changelog("g:b", "2.0.0").await.unwrap();

        assert_eq!(repo.inner.get_call_count(), 3);
        assert_eq!(repo.cache_size(), 3);
    }

    #[tokio::test]
    async fn test_caching_repository_does_not_cache_errors() {
        let repo = CachingChangelogRepository::new(MockChangelogRepository::new());

        assert!(repo.fetch_changelog("g:a", "error").await.is_err());
        assert!(repo.fetch_changelog("g:a", "error").await.is_err());

        assert_eq!(repo.inner.get_call_count(), 2);
        assert_eq!(repo.cache_size(), 0);
    }
}
