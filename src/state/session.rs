//! Per-query crawl session
//!
//! A session owns the visited set, the admitted documents and the deadline
//! for exactly one query. It is created when the query starts crawling and
//! dropped when the query returns, so concurrent queries never see each
//! other's state.

use crate::config::CrawlerConfig;
use crate::crawler::Document;
use crate::state::SessionPhase;
use crate::SearchError;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use url::Url;

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug)]
struct SessionInner {
    phase: SessionPhase,
    visited: HashSet<String>,
    documents: Vec<Document>,
}

/// Isolated crawl state for one query
#[derive(Debug)]
pub struct CrawlSession {
    id: u64,
    started_at: Instant,
    deadline: Instant,
    max_depth: u32,
    max_pages: usize,
    cancel: CancellationToken,
    inner: Mutex<SessionInner>,
}

impl CrawlSession {
    /// Creates an idle session whose deadline starts counting now
    pub fn new(config: &CrawlerConfig) -> Self {
        let started_at = Instant::now();
        Self {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            started_at,
            deadline: started_at + config.crawl_timeout(),
            max_depth: config.max_depth,
            max_pages: config.max_pages,
            cancel: CancellationToken::new(),
            inner: Mutex::new(SessionInner {
                phase: SessionPhase::Idle,
                visited: HashSet::new(),
                documents: Vec::new(),
            }),
        }
    }

    /// Process-unique session identifier
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn phase(&self) -> SessionPhase {
        self.inner.lock().phase
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Token cancelled when the session completes; fetch branches select on it
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Moves the session from `Idle` to `Crawling`
    pub fn begin(&self) -> Result<(), SearchError> {
        let mut inner = self.inner.lock();
        transition(&mut inner, SessionPhase::Crawling)
    }

    /// Claims `url` for fetching at `depth`
    ///
    /// Returns true (and marks the URL visited) only while crawling, when the
    /// depth is within budget, the page budget has room and the URL has not
    /// been claimed before. A URL is therefore fetched at most once per
    /// session and the visited set never exceeds the page budget.
    pub fn try_claim(&self, url: &Url, depth: u32) -> bool {
        if depth > self.max_depth || self.cancel.is_cancelled() {
            return false;
        }

        let mut inner = self.inner.lock();
        if inner.phase != SessionPhase::Crawling || inner.visited.len() >= self.max_pages {
            return false;
        }

        inner.visited.insert(url.as_str().to_string())
    }

    /// Number of URLs claimed so far
    pub fn visited_count(&self) -> usize {
        self.inner.lock().visited.len()
    }

    /// Adds a document to the session's result set
    ///
    /// Returns false and drops the document if the session has already
    /// completed (a branch that finished after the deadline) or the URL was
    /// never claimed here.
    pub fn admit(&self, document: Document) -> bool {
        let mut inner = self.inner.lock();
        if self.cancel.is_cancelled() || inner.phase != SessionPhase::Crawling {
            return false;
        }

        if !inner.visited.contains(&document.url) {
            return false;
        }

        inner.documents.push(document);
        true
    }

    /// Number of admitted documents
    pub fn document_count(&self) -> usize {
        self.inner.lock().documents.len()
    }

    /// Completes the session and hands back its documents in admission order
    ///
    /// Cancels the session token first, so nothing admitted afterwards can
    /// alter the returned set.
    pub fn finish(&self) -> Result<Vec<Document>, SearchError> {
        let mut inner = self.inner.lock();
        self.cancel.cancel();
        transition(&mut inner, SessionPhase::Complete)?;
        Ok(std::mem::take(&mut inner.documents))
    }
}

fn transition(inner: &mut SessionInner, to: SessionPhase) -> Result<(), SearchError> {
    if !inner.phase.can_transition_to(to) {
        return Err(SearchError::InvalidTransition {
            from: inner.phase,
            to,
        });
    }
    inner.phase = to;
    Ok(())
}
