use crate::crawler::CrawlStats;
use serde::{Deserialize, Serialize};

/// One entry of a search response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Where a result list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultOrigin {
    /// BM25-ranked crawled documents
    Ranked,

    /// Crawl produced no documents; results point at the seed URLs
    SeedFallback,

    /// Nothing to crawl or nothing matched; a single external search pointer
    ExternalPointer,
}

impl ResultOrigin {
    /// Only ranked lists are worth reusing for later identical queries
    pub fn is_cacheable(&self) -> bool {
        matches!(self, Self::Ranked)
    }
}

/// Results produced by a [`ResultSource`](super::ResultSource)
#[derive(Debug, Clone, PartialEq)]
pub struct SourceResults {
    pub results: Vec<SearchResult>,
    pub origin: ResultOrigin,

    /// Set when a crawl produced the results
    pub stats: Option<CrawlStats>,
}

impl SourceResults {
    pub fn new(results: Vec<SearchResult>, origin: ResultOrigin) -> Self {
        Self {
            results,
            origin,
            stats: None,
        }
    }

    /// Attaches the stats of the crawl behind these results
    pub fn with_stats(mut self, stats: CrawlStats) -> Self {
        self.stats = Some(stats);
        self
    }
}
