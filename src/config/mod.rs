//! Configuration module for Bubble Search
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so running without a file is supported.
//!
//! # Example
//!
//! ```no_run
//! use bubble_search::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("bubble.toml")).unwrap();
//! println!("Crawl budget: {}ms", config.crawler.crawl_timeout_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CacheConfig, Config, CrawlerConfig, ExtractorConfig, FetcherConfig, RankingConfig,
    SeedsConfig, ServerConfig, TopicEntry,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
