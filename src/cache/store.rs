//! Cache Store Module
//!
//! The unsynchronised key → entry mapping. `Cache` wraps it in a mutex shared
//! with the reaper; every method here assumes the caller holds that lock.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Time-bounded storage of response bodies keyed by request URL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage, at most one entry per key
    entries: HashMap<String, CacheEntry>,
    /// Lookup and sweep counters
    stats: CacheStats,
    /// Entry lifetime, fixed at construction
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose sweeps expire entries older than `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`, stamping it with the current time.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Bytes>) {
        self.entries.insert(key.into(), CacheEntry::new(value.into()));
    }

    // == Get ==
    /// Returns the stored bytes for `key` if it has not been reaped.
    ///
    /// The returned `Bytes` is an independent handle: a later sweep removing the
    /// entry does not affect it.
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Sweep ==
    /// Removes every entry created strictly before `now - ttl`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let removed = match now.checked_sub(self.ttl) {
            Some(cutoff) => {
                let before = self.entries.len();
                self.entries.retain(|_, entry| !entry.is_expired(cutoff));
                before - self.entries.len()
            }
            // Cutoff predates the clock origin; nothing can be older
            None => 0,
        };

        self.stats.record_sweep(removed);
        removed
    }

    // == TTL ==
    /// Returns the entry lifetime this store was created with.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Len ==
    /// Returns the number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
