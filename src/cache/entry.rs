//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A single cached response body and the moment it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Insertion timestamp, refreshed on overwrite
    pub created_at: Instant,
    /// Opaque stored bytes
    pub value: Bytes,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Bytes) -> Self {
        Self {
            created_at: Instant::now(),
            value,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry falls before a sweep cutoff.
    ///
    /// Boundary condition: an entry created exactly at `cutoff` is still live.
    /// Only entries strictly older than the cutoff are expired.
    pub fn is_expired(&self, cutoff: Instant) -> bool {
        self.created_at < cutoff
    }

    // == Age ==
    /// Time elapsed since the entry was stored.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_entry_creation() {
        let entry = CacheEntry::new(Bytes::from_static(b"body"));

        assert_eq!(entry.value, Bytes::from_static(b"body"));
        assert_eq!(entry.age(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_age_tracks_clock() {
        let entry = CacheEntry::new(Bytes::new());

        tokio::time::advance(Duration::from_millis(250)).await;

        assert_eq!(entry.age(), Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(Bytes::new());
        let created = entry.created_at;

        // Exactly at the cutoff is not expired
        assert!(!entry.is_expired(created));
        // Strictly older than the cutoff is expired
        assert!(entry.is_expired(created + Duration::from_nanos(1)));
        // A cutoff before creation never expires it
        assert!(!entry.is_expired(created - Duration::from_millis(1)));
    }
}
