//! Result sources: where a cache miss gets its results from

use crate::config::{Config, RankingConfig};
use crate::crawler::{Coordinator, HttpFetcher, PageFetcher};
use crate::index::{build_index, rank, RankedResult};
use crate::search::fallback::{search_elsewhere, seed_fallback};
use crate::search::{ResultOrigin, SourceResults};
use crate::seeds::SeedGenerator;
use crate::SearchError;
use async_trait::async_trait;
use std::sync::Arc;

/// Produces results for a query that missed the cache
#[async_trait]
pub trait ResultSource: Send + Sync {
    /// Returns at most `limit` results for `query`
    async fn fetch_results(&self, query: &str, limit: usize) -> Result<SourceResults, SearchError>;
}

/// Seeds → time-boxed crawl → in-memory index → BM25 ranking
pub struct LiveCrawl {
    seeds: SeedGenerator,
    coordinator: Coordinator,
    ranking: RankingConfig,
}

impl LiveCrawl {
    /// Builds a live source that fetches over HTTP
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let fetcher = HttpFetcher::new(&config.fetcher)?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// Builds a live source on top of any [`PageFetcher`]
    pub fn with_fetcher(config: &Config, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            seeds: SeedGenerator::new(&config.seeds),
            coordinator: Coordinator::new(
                fetcher,
                config.extractor.clone(),
                config.crawler.clone(),
            ),
            ranking: config.ranking.clone(),
        }
    }
}

#[async_trait]
impl ResultSource for LiveCrawl {
    async fn fetch_results(&self, query: &str, limit: usize) -> Result<SourceResults, SearchError> {
        let seeds = self.seeds.generate(query);
        if seeds.is_empty() {
            tracing::info!("No seeds for {:?}, pointing elsewhere", query);
            return Ok(SourceResults::new(
                search_elsewhere(query),
                ResultOrigin::ExternalPointer,
            ));
        }

        let outcome = self.coordinator.crawl(&seeds).await?;
        let documents = outcome.documents;

        if documents.is_empty() {
            tracing::info!("No pages crawled for {:?}, falling back to seed URLs", query);
            return Ok(SourceResults::new(
                seed_fallback(&seeds, limit),
                ResultOrigin::SeedFallback,
            )
            .with_stats(outcome.stats));
        }

        let (index, doc_freq) = build_index(&documents);
        let ranked = rank(&documents, &index, &doc_freq, query, &self.ranking, limit);

        if ranked.is_empty() {
            tracing::info!(
                "None of {} documents matched {:?}",
                documents.len(),
                query
            );
            return Ok(SourceResults::new(
                search_elsewhere(query),
                ResultOrigin::ExternalPointer,
            ));
        }

        tracing::info!(
            "Ranked {} results for {:?} from {} pages in {}ms",
            ranked.len(),
            query,
            documents.len(),
            outcome.stats.elapsed_ms
        );

        Ok(SourceResults::new(
            ranked.into_iter().map(RankedResult::into_search_result).collect(),
            ResultOrigin::Ranked,
        )
        .with_stats(outcome.stats))
    }
}
