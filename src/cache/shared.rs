//! Shared Cache Module
//!
//! The concurrency-safe cache handle: one store behind one exclusive lock,
//! plus the reaper that sweeps it for as long as the handle lives.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::error::{PokedexError, Result};
use crate::tasks::{spawn_reaper, ReaperHandle};

// == Cache ==
/// Time-bounded, concurrency-safe response cache.
///
/// `add`, `get` and the reaper's sweeps all serialise on a single mutex. The
/// reaper runs until `shutdown` is awaited or the cache is dropped. An entry
/// may outlive its TTL by up to one further sweep period.
///
/// Share a cache between callers with `Arc<Cache>`.
#[derive(Debug)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    reaper: ReaperHandle,
    ttl: Duration,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper, which sweeps every `ttl`.
    ///
    /// Must be called from within a tokio runtime. Fails if `ttl` is zero.
    pub fn new(ttl: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(PokedexError::InvalidTtl);
        }

        let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
        let reaper = spawn_reaper(store.clone(), ttl);

        Ok(Self { store, reaper, ttl })
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`, stamped with the current time.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        self.store.lock().await.add(key, value);
    }

    // == Get ==
    /// Returns the stored bytes for `key`, or `None` if absent or reaped.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        let value = self.store.lock().await.get(key);
        debug!(key, hit = value.is_some(), "Cache lookup");
        value
    }

    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns true while the reaper task is still running.
    pub fn is_reaping(&self) -> bool {
        !self.reaper.is_finished()
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to exit.
    pub async fn shutdown(self) {
        self.reaper.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_cache_rejects_zero_ttl() {
        let result = Cache::new(Duration::ZERO);
        assert!(matches!(result, Err(PokedexError::InvalidTtl)));
    }

    #[tokio::test]
    async fn test_cache_miss_on_empty() {
        let cache = Cache::new(Duration::from_secs(60)).unwrap();

        assert!(cache.get("a").await.is_none());
        assert!(cache.get("https://pokeapi.co/api/v2/location-area/").await.is_none());
        assert!(cache.is_empty().await);

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_cache_immediate_visibility() {
        let cache = Cache::new(Duration::from_secs(60)).unwrap();

        cache.add("a", vec![1u8, 2, 3]).await;

        assert_eq!(cache.get("a").await, Some(Bytes::from(vec![1u8, 2, 3])));
        assert_eq!(cache.len().await, 1);

        cache.shutdown().await;
    }

    // Real clock: the first tick always lands after its deadline, so an entry
    // added right after construction is strictly older than the cutoff.
    #[tokio::test]
    async fn test_cache_scenario_sleep_past_ttl() {
        let cache = Cache::new(Duration::from_millis(100)).unwrap();

        cache.add("a", vec![1u8, 2, 3]).await;
        assert_eq!(cache.get("a").await, Some(Bytes::from(vec![1u8, 2, 3])));

        sleep(Duration::from_millis(150)).await;

        assert!(cache.get("a").await.is_none());
        cache.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_entry_exactly_ttl_old_survives_sweep() {
        let cache = Cache::new(Duration::from_millis(100)).unwrap();

        // Paused clock: stamped at the same instant the reaper schedule starts
        cache.add("a", vec![1u8, 2, 3]).await;

        sleep(Duration::from_millis(150)).await;
        assert!(cache.get("a").await.is_some());

        sleep(Duration::from_millis(100)).await;
        assert!(cache.get("a").await.is_none());

        cache.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_refresh_resets_age() {
        let cache = Cache::new(Duration::from_millis(50)).unwrap();

        cache.add("a", Bytes::from_static(b"v1")).await;
        sleep(Duration::from_millis(40)).await;
        cache.add("a", Bytes::from_static(b"v2")).await;
        sleep(Duration::from_millis(20)).await;

        assert_eq!(cache.get("a").await, Some(Bytes::from_static(b"v2")));

        cache.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_entry_bounded_by_two_ttls() {
        let ttl = Duration::from_millis(100);
        let cache = Cache::new(ttl).unwrap();

        // Inserted just after the first sweep
        sleep(Duration::from_millis(101)).await;
        cache.add("a", Bytes::from_static(b"late")).await;

        // Sweep at 200ms keeps it (99ms old); sweep at 300ms removes it
        sleep(Duration::from_millis(150)).await;
        assert!(cache.get("a").await.is_some());
        sleep(Duration::from_millis(100)).await;
        assert!(cache.get("a").await.is_none());

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_cache_shutdown_stops_reaper() {
        let cache = Cache::new(Duration::from_millis(10)).unwrap();
        assert!(cache.is_reaping());
        let store = cache.store.clone();

        cache.shutdown().await;

        // The joined reaper and the consumed cache both released their clones
        assert_eq!(Arc::strong_count(&store), 1);
    }

    #[tokio::test]
    async fn test_cache_stats_track_lookups() {
        let cache = Cache::new(Duration::from_secs(60)).unwrap();

        cache.add("a", Bytes::from_static(b"1")).await;
        cache.get("a").await;
        cache.get("b").await;

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);

        cache.shutdown().await;
    }
}
