//! Query result cache
//!
//! Ranked result lists keyed by the normalized query. Entries expire a fixed
//! time after insertion (checked lazily on lookup) and the oldest insertion is
//! evicted first once the cache is over capacity. This is the only state
//! shared between concurrent queries.

mod entry;

pub use entry::CacheEntry;

use crate::config::CacheConfig;
use crate::crawler::CrawlStats;
use crate::search::SearchResult;
use chrono::Duration;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};

/// Longest entry lifetime a cache accepts (one day)
pub const MAX_TTL_SECS: u64 = 86_400;

/// Normalizes a query into its cache key (trimmed, lowercased)
pub fn normalize_key(query: &str) -> String {
    query.trim().to_lowercase()
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<String, CacheEntry>,

    /// Keys in insertion order, oldest first
    order: VecDeque<String>,
}

impl CacheInner {
    fn remove(&mut self, key: &str) -> Option<CacheEntry> {
        let entry = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        Some(entry)
    }
}

/// Bounded, TTL-expiring FIFO cache of query results
#[derive(Debug)]
pub struct QueryCache {
    ttl: Duration,
    capacity: usize,
    inner: Mutex<CacheInner>,
}

impl QueryCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            ttl: Duration::seconds(config.ttl_secs.min(MAX_TTL_SECS) as i64),
            capacity: config.capacity,
            inner: Mutex::new(CacheInner::default()),
        }
    }

    /// Looks up the entry cached for `query`
    ///
    /// An expired entry is removed and reported as a miss.
    ///
    /// # Arguments
    ///
    /// * `query` - Raw query text; normalized before lookup
    ///
    /// # Returns
    ///
    /// * `Some(entry)` - A live entry (cloned out of the cache)
    /// * `None` - No entry, or the entry had expired
    pub fn get(&self, query: &str) -> Option<CacheEntry> {
        let key = normalize_key(query);
        let mut inner = self.inner.lock();

        let stale = inner.entries.get(&key)?.is_stale(self.ttl);
        if stale {
            tracing::debug!("Cache entry for {:?} expired", key);
            inner.remove(&key);
            return None;
        }

        inner.entries.get(&key).cloned()
    }

    /// Stores `results` for `query`, evicting the oldest insertions while over
    /// capacity
    ///
    /// Re-inserting an existing key replaces it and counts as a fresh
    /// insertion.
    pub fn put(&self, query: &str, results: Vec<SearchResult>, stats: Option<CrawlStats>) {
        let key = normalize_key(query);
        let mut inner = self.inner.lock();

        inner.remove(&key);
        inner.order.push_back(key.clone());
        inner
            .entries
            .insert(key.clone(), CacheEntry::new(key, results, stats));

        while inner.entries.len() > self.capacity {
            let Some(oldest) = inner.order.pop_front() else {
                break;
            };
            inner.entries.remove(&oldest);
            tracing::debug!("Evicted cache entry for {:?}", oldest);
        }
    }

    /// Returns true if a live or expired entry exists for `query`
    pub fn contains(&self, query: &str) -> bool {
        self.inner.lock().entries.contains_key(&normalize_key(query))
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.order.clear();
    }
}
