//! Completion cache for deferred view loads.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::OnceCell;

use crate::view::component::{LoadError, View, ViewLoader};

/// Load-once cache for lazily loaded views, keyed by route name.
///
/// Semantics:
/// - A successful load is cached for the life of the process and never
///   re-triggered.
/// - Concurrent first visits coalesce into a single in-flight load.
/// - A failed (or timed-out) load is NOT cached; the next visit retries.
pub struct LoaderCache {
    slots: DashMap<String, Arc<OnceCell<Arc<dyn View>>>>,
    timeout: Duration,
}

impl LoaderCache {
    /// Create an empty cache with the given per-load timeout.
    pub fn new(timeout: Duration) -> Self {
        Self {
            slots: DashMap::new(),
            timeout,
        }
    }

    /// Get the cached view for a route, loading it if this is the first
    /// (successful) visit.
    pub async fn get_or_load(
        &self,
        route: &str,
        loader: &Arc<dyn ViewLoader>,
    ) -> Result<Arc<dyn View>, LoadError> {
        let slot = {
            let entry = self.slots.entry(route.to_string()).or_default();
            entry.value().clone()
        };

        slot.get_or_try_init(|| async {
            tracing::debug!(route, "deferred view load started");
            let timeout_ms = self.timeout.as_millis() as u64;
            match tokio::time::timeout(self.timeout, loader.load()).await {
                Ok(Ok(view)) => {
                    tracing::info!(route, view = view.name(), "deferred view loaded");
                    Ok(view)
                }
                Ok(Err(e)) => {
                    tracing::warn!(route, error = %e, "deferred view load failed");
                    Err(e)
                }
                Err(_) => {
                    tracing::warn!(route, timeout_ms, "deferred view load timed out");
                    Err(LoadError::Timeout(timeout_ms))
                }
            }
        })
        .await
        .map(Arc::clone)
    }

    /// Whether a route's view has already been loaded.
    pub fn is_loaded(&self, route: &str) -> bool {
        self.slots
            .get(route)
            .map(|slot| slot.initialized())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::component::StaticView;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug)]
    struct CountingLoader {
        calls: AtomicU32,
        fail_first: bool,
    }

    #[async_trait]
    impl ViewLoader for CountingLoader {
        async fn load(&self) -> Result<Arc<dyn View>, LoadError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && call == 0 {
                return Err(LoadError::Fetch("transient".into()));
            }
            Ok(Arc::new(StaticView::new("About", "about page")))
        }
    }

    #[tokio::test]
    async fn test_success_is_cached() {
        let cache = LoaderCache::new(Duration::from_secs(1));
        let counting = Arc::new(CountingLoader {
            calls: AtomicU32::new(0),
            fail_first: false,
        });
        let loader: Arc<dyn ViewLoader> = counting.clone();

        let first = cache.get_or_load("about", &loader).await.unwrap();
        let second = cache.get_or_load("about", &loader).await.unwrap();
        assert_eq!(first.name(), second.name());
        assert!(cache.is_loaded("about"));
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_not_cached() {
        let cache = LoaderCache::new(Duration::from_secs(1));
        let counting = Arc::new(CountingLoader {
            calls: AtomicU32::new(0),
            fail_first: true,
        });
        let loader: Arc<dyn ViewLoader> = counting.clone();

        assert!(cache.get_or_load("about", &loader).await.is_err());
        assert!(!cache.is_loaded("about"));

        // Retry succeeds and is cached; no third load afterwards.
        assert!(cache.get_or_load("about", &loader).await.is_ok());
        assert!(cache.get_or_load("about", &loader).await.is_ok());
        assert_eq!(counting.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_timeout_maps_to_load_error() {
        #[derive(Debug)]
        struct SlowLoader;

        #[async_trait]
        impl ViewLoader for SlowLoader {
            async fn load(&self) -> Result<Arc<dyn View>, LoadError> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(Arc::new(StaticView::new("About", "")))
            }
        }

        let cache = LoaderCache::new(Duration::from_millis(10));
        let loader: Arc<dyn ViewLoader> = Arc::new(SlowLoader);
        match cache.get_or_load("about", &loader).await {
            Err(LoadError::Timeout(_)) => {}
            other => panic!("expected timeout, got {:?}", other.map(|v| v.name().to_string())),
        }
    }
}
