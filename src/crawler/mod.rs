//! Crawler module for per-query page fetching and processing
//!
//! This module contains the crawling logic for one query session:
//! - HTTP fetching with a short per-request timeout
//! - Content and link extraction from fetched HTML
//! - Deadline-bounded crawl coordination

mod coordinator;
mod document;
mod extractor;
mod fetcher;

pub use coordinator::{Coordinator, CrawlOutcome, CrawlStats};
pub use document::Document;
pub use extractor::{ExtractError, ExtractedPage, Extractor};
pub use fetcher::{build_http_client, FetchError, HttpFetcher, PageFetcher};
