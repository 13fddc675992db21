use crate::cache::QueryCache;
use crate::config::{Config, ServerConfig};
use crate::search::{LiveCrawl, ResultSource, SearchResult};
use crate::SearchError;
use std::sync::Arc;

/// Cache-fronted search over a [`ResultSource`]
pub struct SearchEngine {
    source: Arc<dyn ResultSource>,
    cache: QueryCache,
    default_limit: usize,
    max_limit: usize,
}

impl SearchEngine {
    pub fn new(source: Arc<dyn ResultSource>, cache: QueryCache, server: &ServerConfig) -> Self {
        Self {
            source,
            cache,
            default_limit: server.default_limit,
            max_limit: server.max_limit,
        }
    }

    /// Builds an engine backed by a live HTTP crawl
    pub fn from_config(config: &Config) -> Result<Self, SearchError> {
        let source = LiveCrawl::new(config)?;
        Ok(Self::new(
            Arc::new(source),
            QueryCache::new(&config.cache),
            &config.server,
        ))
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Clamps a requested result count into `[1, max_limit]`
    pub fn clamp_limit(&self, limit: usize) -> usize {
        limit.clamp(1, self.max_limit)
    }

    /// Returns up to `limit` results for `query`
    ///
    /// A cached list is served without crawling. On a miss the source is
    /// asked for `max_limit` results so a later, larger request can still be
    /// answered from the cache; only ranked lists are stored.
    ///
    /// # Arguments
    ///
    /// * `query` - Query text; surrounding whitespace is ignored
    /// * `limit` - Requested result count, clamped into `[1, max_limit]`
    ///
    /// # Returns
    ///
    /// * `Ok(results)` - Ranked results, or fallback pointers when nothing ranked
    /// * `Err(SearchError)` - The result source failed unexpectedly
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, SearchError> {
        let query = query.trim();
        let limit = self.clamp_limit(limit);

        if let Some(entry) = self.cache.get(query) {
            match &entry.stats {
                Some(stats) => tracing::info!(
                    "Cache hit for {:?} ({} results, {} pages indexed in {}ms, age {}s)",
                    entry.query,
                    entry.results.len(),
                    stats.pages_indexed,
                    stats.elapsed_ms,
                    entry.age().num_seconds()
                ),
                None => tracing::info!(
                    "Cache hit for {:?} ({} results)",
                    entry.query,
                    entry.results.len()
                ),
            }

            let mut cached = entry.results;
            cached.truncate(limit);
            return Ok(cached);
        }

        let fetched = self.source.fetch_results(query, self.max_limit).await?;
        let mut results = fetched.results;

        if fetched.origin.is_cacheable() {
            self.cache.put(query, results.clone(), fetched.stats);
        } else {
            tracing::debug!("Not caching {:?} results for {:?}", fetched.origin, query);
        }

        results.truncate(limit);
        Ok(results)
    }
}
