//! Seed URL generation
//!
//! Maps a query to a small, ordered set of starting URLs by matching its
//! keywords against a topic table, topping the set up with general-purpose
//! defaults when the topics alone don't yield enough.

mod topics;

pub use topics::{DEFAULT_SEEDS, TOPIC_SEEDS};

use crate::config::{SeedsConfig, TopicEntry};
use crate::url::canonicalize_url;
use std::collections::HashSet;
use url::Url;

/// Keywords must be longer than this many characters
const MIN_KEYWORD_CHARS: usize = 3;

/// Derives crawl seeds from query text
#[derive(Debug, Clone)]
pub struct SeedGenerator {
    topics: Vec<TopicEntry>,
    defaults: Vec<String>,
    max_seeds: usize,
    min_seeds: usize,
}

impl SeedGenerator {
    pub fn new(config: &SeedsConfig) -> Self {
        Self {
            topics: config.topics.clone(),
            defaults: config.defaults.clone(),
            max_seeds: config.max_seeds,
            min_seeds: config.min_seeds,
        }
    }

    /// Returns up to `max_seeds` distinct seed URLs for `query`
    ///
    /// Topic URLs come first in table order, then defaults if fewer than
    /// `min_seeds` topic URLs matched. Generation never fails; an empty
    /// result only happens when the configuration has no usable URLs.
    ///
    /// # Arguments
    ///
    /// * `query` - Raw query text
    ///
    /// # Returns
    ///
    /// Canonical seed URLs in dispatch order
    pub fn generate(&self, query: &str) -> Vec<Url> {
        let keywords = keywords(query);

        let mut seen = HashSet::new();
        let mut seeds = Vec::new();

        for topic in &self.topics {
            if keywords.iter().any(|kw| topic_matches(&topic.name, kw)) {
                push_all(&mut seeds, &mut seen, &topic.urls);
            }
        }

        if seeds.len() < self.min_seeds {
            push_all(&mut seeds, &mut seen, &self.defaults);
        }

        seeds.truncate(self.max_seeds);

        tracing::debug!("Generated {} seeds for {:?}", seeds.len(), query);
        seeds
    }
}

/// Lowercased words longer than [`MIN_KEYWORD_CHARS`]
fn keywords(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_KEYWORD_CHARS)
        .map(str::to_string)
        .collect()
}

/// A topic matches if it contains the keyword, or the keyword contains the
/// topic's first character.
fn topic_matches(topic: &str, keyword: &str) -> bool {
    if topic.contains(keyword) {
        return true;
    }

    topic
        .chars()
        .next()
        .is_some_and(|first| keyword.contains(first))
}

fn push_all(seeds: &mut Vec<Url>, seen: &mut HashSet<String>, urls: &[String]) {
    for raw in urls {
        match canonicalize_url(raw) {
            Ok(url) => {
                if seen.insert(url.as_str().to_string()) {
                    seeds.push(url);
                }
            }
            Err(e) => tracing::warn!("Skipping seed {}: {}", raw, e),
        }
    }
}
