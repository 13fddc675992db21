//! Cached result list for one normalized query

use crate::crawler::CrawlStats;
use crate::search::SearchResult;
use chrono::{DateTime, Duration, Utc};

/// A ranked result list with its creation time
///
/// Entries expire a fixed time after creation; reading an entry does not
/// extend its life.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Normalized query the entry is keyed by
    pub query: String,

    /// Up to the server's maximum limit of results, best first
    pub results: Vec<SearchResult>,

    /// When the entry was inserted
    pub created_at: DateTime<Utc>,

    /// Counters of the crawl that produced the results
    pub stats: Option<CrawlStats>,
}

impl CacheEntry {
    /// Creates an entry stamped with the current time
    ///
    /// # Arguments
    ///
    /// * `query` - The normalized cache key
    /// * `results` - Ranked results, best first
    /// * `stats` - Stats of the crawl behind `results`, if one ran
    pub fn new(query: String, results: Vec<SearchResult>, stats: Option<CrawlStats>) -> Self {
        Self {
            query,
            results,
            created_at: Utc::now(),
            stats,
        }
    }

    /// Checks if the entry is older than `ttl`
    pub fn is_stale(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }

    /// How long ago the entry was created
    pub fn age(&self) -> Duration {
        Utc::now() - self.created_at
    }
}
