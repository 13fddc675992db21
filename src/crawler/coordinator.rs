//! Crawler coordinator - per-query crawl orchestration
//!
//! This module runs one query session's crawl:
//! - Dispatching seed URLs at depth 0
//! - Fanning out to extracted links as depth+1 branches
//! - Racing outstanding branches against the session deadline
//! - Collecting whatever documents were admitted by the time it stops

use crate::config::{CrawlerConfig, ExtractorConfig};
use crate::crawler::{Document, ExtractError, Extractor, FetchError, PageFetcher};
use crate::state::CrawlSession;
use crate::SearchError;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::Instrument;
use url::Url;

/// Counters describing one crawl
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Seeds dispatched at depth 0
    pub seeds_dispatched: usize,

    /// URLs claimed (fetched or in flight when the crawl stopped)
    pub pages_visited: usize,

    /// Documents admitted for indexing
    pub pages_indexed: usize,

    /// Fetches that timed out, failed or returned a non-success status
    pub fetch_failures: usize,

    /// Pages rejected by the extractor
    pub rejected: usize,

    /// Wall-clock duration of the crawl
    pub elapsed_ms: u64,

    /// True if the deadline stopped the crawl before the frontier drained
    pub timed_out: bool,
}

/// Final document set of a crawl
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    /// Admitted documents in completion order
    pub documents: Vec<Document>,
    pub stats: CrawlStats,
}

/// How a single fetch branch ended
#[derive(Debug)]
enum BranchResult {
    Admitted { depth: u32, links: Vec<Url> },
    FetchFailed(FetchError),
    Rejected(ExtractError),
    /// Finished after the session completed; nothing was recorded
    Discarded,
}

/// Runs time-boxed crawls for query sessions
pub struct Coordinator {
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<Extractor>,
    config: CrawlerConfig,
}

impl Coordinator {
    /// Creates a coordinator
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Transport used for every page fetch
    /// * `extractor_config` - Limits for turning fetched HTML into documents
    /// * `config` - Depth, page and time budgets applied to each crawl
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        extractor_config: ExtractorConfig,
        config: CrawlerConfig,
    ) -> Self {
        Self {
            fetcher,
            extractor: Arc::new(Extractor::new(extractor_config)),
            config,
        }
    }

    /// Crawls from `seeds` within the configured budgets
    ///
    /// A fresh [`CrawlSession`] is created for the call and dropped before it
    /// returns. The crawl stops when every branch has settled or when the
    /// deadline fires, whichever comes first; the deadline wins a tie. A
    /// partial document set is a normal outcome.
    ///
    /// # Arguments
    ///
    /// * `seeds` - Starting URLs; only the first `max_seed_fetches` are fetched
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlOutcome)` - Admitted documents plus crawl counters
    /// * `Err(SearchError)` - The session could not be driven through its phases
    pub async fn crawl(&self, seeds: &[Url]) -> Result<CrawlOutcome, SearchError> {
        let session = Arc::new(CrawlSession::new(&self.config));
        let span = tracing::info_span!("crawl", session = session.id());

        self.run_session(session, seeds).instrument(span).await
    }

    async fn run_session(
        &self,
        session: Arc<CrawlSession>,
        seeds: &[Url],
    ) -> Result<CrawlOutcome, SearchError> {
        let mut stats = CrawlStats::default();
        let mut branches: JoinSet<BranchResult> = JoinSet::new();

        session.begin()?;

        for seed in seeds.iter().take(self.config.max_seed_fetches) {
            if self.dispatch(&session, &mut branches, seed.clone(), 0) {
                stats.seeds_dispatched += 1;
            }
        }

        tracing::info!(
            "Crawling {} seeds (budget: {} pages, depth {}, {}ms)",
            stats.seeds_dispatched,
            self.config.max_pages,
            self.config.max_depth,
            self.config.crawl_timeout_ms
        );

        let deadline = tokio::time::sleep_until(session.deadline());
        tokio::pin!(deadline);

        stats.timed_out = loop {
            tokio::select! {
                biased;

                _ = &mut deadline => break true,

                joined = branches.join_next() => match joined {
                    None => break false,
                    Some(Ok(result)) => self.settle(&session, &mut branches, result, &mut stats),
                    Some(Err(e)) if e.is_panic() => {
                        tracing::warn!("Crawl branch panicked: {}", e);
                    }
                    Some(Err(_)) => {}
                },
            }
        };

        // Close the session before touching the branches so a late result
        // can't slip into the document set.
        let documents = session.finish()?;
        branches.abort_all();

        stats.pages_visited = session.visited_count();
        stats.pages_indexed = documents.len();
        stats.elapsed_ms = session.elapsed().as_millis() as u64;

        if stats.timed_out {
            tracing::info!(
                "Crawl deadline reached after {}ms with {} documents ({} branches abandoned)",
                stats.elapsed_ms,
                stats.pages_indexed,
                branches.len()
            );
        } else {
            tracing::info!(
                "Crawl complete: {} documents from {} pages in {}ms",
                stats.pages_indexed,
                stats.pages_visited,
                stats.elapsed_ms
            );
        }

        Ok(CrawlOutcome { documents, stats })
    }

    /// Records a finished branch and fans out to its links
    fn settle(
        &self,
        session: &Arc<CrawlSession>,
        branches: &mut JoinSet<BranchResult>,
        result: BranchResult,
        stats: &mut CrawlStats,
    ) {
        match result {
            BranchResult::Admitted { depth, links } => {
                tracing::debug!(
                    "Admitted page at depth {} ({} documents so far)",
                    depth,
                    session.document_count()
                );
                for link in links {
                    self.dispatch(session, branches, link, depth + 1);
                }
            }
            BranchResult::FetchFailed(e) => {
                tracing::debug!("Fetch failed: {}", e);
                stats.fetch_failures += 1;
            }
            BranchResult::Rejected(e) => {
                tracing::debug!("Page rejected: {}", e);
                stats.rejected += 1;
            }
            BranchResult::Discarded => {}
        }
    }

    /// Claims `url` in the session and spawns its fetch branch
    ///
    /// Returns false if the session refused the claim (already visited, too
    /// deep, or out of page budget).
    fn dispatch(
        &self,
        session: &Arc<CrawlSession>,
        branches: &mut JoinSet<BranchResult>,
        url: Url,
        depth: u32,
    ) -> bool {
        if !session.try_claim(&url, depth) {
            return false;
        }

        tracing::debug!("Depth {}: {}", depth, url);

        let fetcher = Arc::clone(&self.fetcher);
        let extractor = Arc::clone(&self.extractor);
        let session = Arc::clone(session);

        branches.spawn(
            run_branch(fetcher, extractor, session, url, depth).in_current_span(),
        );
        true
    }
}

/// Fetches and extracts one URL, admitting the document to the session
async fn run_branch(
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<Extractor>,
    session: Arc<CrawlSession>,
    url: Url,
    depth: u32,
) -> BranchResult {
    let cancelled = session.cancellation_token();

    let body = tokio::select! {
        _ = cancelled.cancelled() => return BranchResult::Discarded,
        fetched = fetcher.fetch(&url) => fetched,
    };

    let html = match body {
        Ok(html) => html,
        Err(e) => return BranchResult::FetchFailed(e),
    };

    match extractor.extract(&url, &html) {
        Ok(page) => {
            if session.admit(page.document) {
                BranchResult::Admitted {
                    depth,
                    links: page.links,
                }
            } else {
                BranchResult::Discarded
            }
        }
        Err(e) => BranchResult::Rejected(e),
    }
}
