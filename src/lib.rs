//! Bubble Search: a per-query web micro-crawler with in-memory ranking
//!
//! For every query this crate picks a handful of seed URLs, crawls them (and a
//! few same-domain links) within a strict time budget, builds an inverted index
//! over the pages it managed to fetch, and ranks them with BM25. Ranked result
//! lists are cached for a few minutes so repeated queries skip the crawl.

pub mod cache;
pub mod config;
pub mod crawler;
pub mod index;
pub mod search;
pub mod seeds;
pub mod server;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Bubble Search operations
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] crawler::FetchError),

    #[error("Extraction error: {0}")]
    Extract(#[from] crawler::ExtractError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid session transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::SessionPhase,
        to: state::SessionPhase,
    },

    #[error("Crawl task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for Bubble Search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use cache::QueryCache;
pub use config::Config;
pub use crawler::{Coordinator, Document, HttpFetcher, PageFetcher};
pub use search::{LiveCrawl, ResultOrigin, ResultSource, SearchEngine, SearchResult};
pub use seeds::SeedGenerator;
pub use state::{CrawlSession, SessionPhase};
