use crate::seeds::{DEFAULT_SEEDS, TOPIC_SEEDS};
use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Bubble Search
///
/// Every section falls back to its defaults, so an empty file (or no file at
/// all) yields a working configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub fetcher: FetcherConfig,
    pub extractor: ExtractorConfig,
    pub ranking: RankingConfig,
    pub cache: CacheConfig,
    pub server: ServerConfig,
    pub seeds: SeedsConfig,
}

/// Per-query crawl budgets
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum link depth followed from a seed (seeds are depth 0)
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Maximum number of URLs fetched within one query session
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    /// Wall-clock budget for the whole crawl (milliseconds)
    #[serde(rename = "crawl-timeout-ms")]
    pub crawl_timeout_ms: u64,

    /// How many of the generated seeds are dispatched at depth 0
    #[serde(rename = "max-seed-fetches")]
    pub max_seed_fetches: usize,
}

impl CrawlerConfig {
    pub fn crawl_timeout(&self) -> Duration {
        Duration::from_millis(self.crawl_timeout_ms)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            max_pages: 12,
            crawl_timeout_ms: 7_000,
            max_seed_fetches: 4,
        }
    }
}

/// HTTP fetch behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout (milliseconds), distinct from the crawl budget
    #[serde(rename = "request-timeout-ms")]
    pub request_timeout_ms: u64,

    /// Maximum number of redirects followed per request
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl FetcherConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
            request_timeout_ms: 3_000,
            max_redirects: 2,
        }
    }
}

/// Page extraction limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Pages with less extracted text than this are rejected
    #[serde(rename = "min-content-chars")]
    pub min_content_chars: usize,

    /// Extracted text is truncated to this many characters
    #[serde(rename = "max-content-chars")]
    pub max_content_chars: usize,

    /// Maximum same-domain links handed back to the coordinator per page
    #[serde(rename = "max-links")]
    pub max_links: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_content_chars: 100,
            max_content_chars: 5_000,
            max_links: 5,
        }
    }
}

/// BM25 parameters and result projection
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Term frequency saturation
    pub k1: f64,

    /// Length normalization
    pub b: f64,

    /// Snippet length in characters (before the ellipsis)
    #[serde(rename = "snippet-chars")]
    pub snippet_chars: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            k1: 1.5,
            b: 0.75,
            snippet_chars: 220,
        }
    }
}

/// Query result cache
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// How long an entry stays valid after creation (seconds)
    #[serde(rename = "ttl-secs")]
    pub ttl_secs: u64,

    /// Maximum number of cached queries
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 300,
            capacity: 50,
        }
    }
}

/// HTTP endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the server binds to
    pub bind: String,

    /// Result count used when the request does not name one
    #[serde(rename = "default-limit")]
    pub default_limit: usize,

    /// Upper clamp for requested result counts
    #[serde(rename = "max-limit")]
    pub max_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            default_limit: 15,
            max_limit: 20,
        }
    }
}

/// Seed URL generation
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedsConfig {
    /// Maximum number of seeds generated per query
    #[serde(rename = "max-seeds")]
    pub max_seeds: usize,

    /// Below this many topic seeds the default set is mixed in
    #[serde(rename = "min-seeds")]
    pub min_seeds: usize,

    /// General-purpose fallback seeds
    pub defaults: Vec<String>,

    /// Topic table, checked in order
    #[serde(rename = "topic")]
    pub topics: Vec<TopicEntry>,
}

impl Default for SeedsConfig {
    fn default() -> Self {
        Self {
            max_seeds: 6,
            min_seeds: 2,
            defaults: DEFAULT_SEEDS.iter().map(|s| s.to_string()).collect(),
            topics: TOPIC_SEEDS
                .iter()
                .map(|(name, urls)| TopicEntry {
                    name: name.to_string(),
                    urls: urls.iter().map(|u| u.to_string()).collect(),
                })
                .collect(),
        }
    }
}

/// A topic keyword and the seed URLs it unlocks
#[derive(Debug, Clone, Deserialize)]
pub struct TopicEntry {
    /// Lowercase topic keyword (e.g., "python")
    pub name: String,

    /// Seed URLs for the topic
    pub urls: Vec<String>,
}
