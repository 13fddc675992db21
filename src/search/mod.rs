//! Query-level search: cache lookup, live crawl and fallbacks
//!
//! [`SearchEngine`] is what the HTTP layer talks to. It fronts a
//! [`ResultSource`] (normally [`LiveCrawl`]) with the shared query cache.

mod engine;
mod fallback;
mod source;
mod types;

pub use engine::SearchEngine;
pub use fallback::{search_elsewhere, seed_fallback};
pub use source::{LiveCrawl, ResultSource};
pub use types::{ResultOrigin, SearchResult, SourceResults};
