use chrono::{DateTime, Utc};

/// A crawled page admitted for indexing
///
/// Created by the extractor, owned by the crawl session that fetched it, and
/// read-only once the session has admitted it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Canonical URL, unique within a session
    pub url: String,

    /// Page title (`<title>`, else first `<h1>`, else "Untitled")
    pub title: String,

    /// Extracted body text, whitespace-collapsed and length-capped
    pub content: String,

    /// When the page was fetched
    pub fetched_at: DateTime<Utc>,
}

impl Document {
    /// Length of the extracted content in characters
    pub fn content_chars(&self) -> usize {
        self.content.chars().count()
    }
}
