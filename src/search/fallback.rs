//! Results used when ranking has nothing to offer

use crate::search::SearchResult;
use crate::url::extract_domain;
use url::Url;

const EXTERNAL_SEARCH_URL: &str = "https://duckduckgo.com/";

/// Points at the seed URLs themselves, one result per seed
pub fn seed_fallback(seeds: &[Url], limit: usize) -> Vec<SearchResult> {
    seeds
        .iter()
        .take(limit)
        .map(|seed| SearchResult {
            title: format!("Resource: {}", extract_domain(seed).unwrap_or_default()),
            url: seed.to_string(),
            snippet: "Related resource for your query".to_string(),
        })
        .collect()
}

/// A single result sending the user to an external engine for `query`
pub fn search_elsewhere(query: &str) -> Vec<SearchResult> {
    let url = match Url::parse_with_params(EXTERNAL_SEARCH_URL, &[("q", query.trim())]) {
        Ok(url) => url.to_string(),
        Err(_) => EXTERNAL_SEARCH_URL.to_string(),
    };

    vec![SearchResult {
        title: format!("Search \"{}\" on DuckDuckGo", query.trim()),
        url,
        snippet: "No crawled page matched your query. Try a web-wide search instead.".to_string(),
    }]
}
