//! Bounded memo of partitions
//!
//! Keyed by the guess and the exact contents of the reference space.
//! Least-recently-used entries are evicted once `capacity` is reached.

use super::calculator::Partition;
use crate::core::Word;
use crate::solver::search_space::SpaceSnapshot;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    guess: Word,
    weighted: bool,
    space: SpaceSnapshot,
}

/// Hit/miss counters and occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub len: usize,
    pub capacity: usize,
}

/// Thread-safe LRU cache of partitions
pub struct PartitionCache {
    entries: Option<Mutex<LruCache<CacheKey, Arc<Partition>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PartitionCache {
    /// Create a cache holding at most `capacity` partitions; `0` disables it
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// A cache that stores nothing
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(0)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.entries.is_some()
    }

    /// Look up the partition of `space` by `guess`
    #[must_use]
    pub fn get(&self, guess: &Word, weighted: bool, space: &SpaceSnapshot) -> Option<Arc<Partition>> {
        let entries = self.entries.as_ref()?;
        let key = CacheKey {
            guess: *guess,
            weighted,
            space: space.clone(),
        };
        let found = entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();

        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    pub fn insert(&self, guess: &Word, weighted: bool, space: &SpaceSnapshot, partition: Arc<Partition>) {
        if let Some(entries) = &self.entries {
            let key = CacheKey {
                guess: *guess,
                weighted,
                space: space.clone(),
            };
            entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .put(key, partition);
        }
    }

    pub fn clear(&self) {
        if let Some(entries) = &self.entries {
            entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
        }
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let (len, capacity) = self.entries.as_ref().map_or((0, 0), |entries| {
            let guard = entries.lock().unwrap_or_else(PoisonError::into_inner);
            (guard.len(), guard.cap().get())
        });
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            len,
            capacity,
        }
    }
}

impl Default for PartitionCache {
    fn default() -> Self {
        Self::new(4_096)
    }
}

impl std::fmt::Debug for PartitionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartitionCache")
            .field("stats", &self.stats())
            .finish()
    }
}
