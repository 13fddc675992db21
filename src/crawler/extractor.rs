//! Page extractor: fetched HTML → indexable document
//!
//! This module turns raw markup into:
//! - A title (`<title>`, else the first `<h1>`, else "Untitled")
//! - Body text from the most likely main-content region, with scripts,
//!   styles, navigation, footers, sidebars and ads left out
//! - A handful of same-domain links for the next crawl depth

use crate::config::ExtractorConfig;
use crate::crawler::Document;
use crate::url::{canonicalize_url, same_domain};
use chrono::Utc;
use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashSet;
use thiserror::Error;
use url::Url;

/// Tags whose text never counts as content
const BOILERPLATE_TAGS: &[&str] = &["script", "style", "nav", "footer", "noscript"];

/// Class names marking non-content regions
const BOILERPLATE_CLASSES: &[&str] = &["ad", "sidebar", "nav"];

/// Main-content candidates, most specific first
const CONTENT_REGIONS: &[&str] = &["main", "article", ".content", ".post", ".article-body", "body"];

/// Why a fetched page was not admitted
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Extracted text from {url} too short ({length} < {minimum} chars)")]
    ContentTooShort {
        url: String,
        length: usize,
        minimum: usize,
    },
}

/// Output of a successful extraction
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    pub document: Document,

    /// Same-domain links to consider at the next depth
    pub links: Vec<Url>,
}

/// Parses fetched pages into [`Document`]s
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extracts a document and its outbound same-domain links
    ///
    /// Pages whose extracted text is shorter than the configured minimum are
    /// rejected; they are not retried.
    ///
    /// # Example
    ///
    /// ```
    /// use bubble_search::config::ExtractorConfig;
    /// use bubble_search::crawler::Extractor;
    /// use url::Url;
    ///
    /// let extractor = Extractor::new(ExtractorConfig { min_content_chars: 5, ..Default::default() });
    /// let url = Url::parse("https://example.com/").unwrap();
    /// let page = extractor
    ///     .extract(&url, "<html><head><title>Hi</title></head><body><p>Hello there</p></body></html>")
    ///     .unwrap();
    /// assert_eq!(page.document.title, "Hi");
    /// assert_eq!(page.document.content, "Hello there");
    /// ```
    pub fn extract(&self, url: &Url, html: &str) -> Result<ExtractedPage, ExtractError> {
        let document = Html::parse_document(html);

        let title = extract_title(&document);
        let content = truncate_chars(&extract_content(&document), self.config.max_content_chars);

        let length = content.chars().count();
        if length < self.config.min_content_chars {
            return Err(ExtractError::ContentTooShort {
                url: url.to_string(),
                length,
                minimum: self.config.min_content_chars,
            });
        }

        let links = extract_links(&document, url, self.config.max_links);

        Ok(ExtractedPage {
            document: Document {
                url: url.to_string(),
                title,
                content,
                fetched_at: Utc::now(),
            },
            links,
        })
    }
}

/// Title fallback chain: `<title>` → first `<h1>` → "Untitled"
fn extract_title(document: &Html) -> String {
    ["title", "h1"]
        .iter()
        .filter_map(|css| Selector::parse(css).ok())
        .find_map(|selector| {
            document
                .select(&selector)
                .next()
                .map(|element| collapse_whitespace(&element.text().collect::<String>()))
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| "Untitled".to_string())
}

/// Whitespace-collapsed text of the first content region present
///
/// A candidate region sitting inside boilerplate (a `.content` block in a
/// sidebar, an `<article>` teaser in a footer) does not count.
fn extract_content(document: &Html) -> String {
    let root = CONTENT_REGIONS
        .iter()
        .filter_map(|css| Selector::parse(css).ok())
        .find_map(|selector| {
            document
                .select(&selector)
                .find(|region| !inside_boilerplate(region))
        })
        .unwrap_or_else(|| document.root_element());

    let mut text = String::new();
    for node in root.descendants() {
        let Node::Text(fragment) = node.value() else {
            continue;
        };

        let hidden = node
            .ancestors()
            .take_while(|ancestor| ancestor.id() != root.id())
            .filter_map(ElementRef::wrap)
            .any(|element| is_boilerplate(&element));

        if !hidden {
            text.push_str(fragment);
            text.push(' ');
        }
    }

    collapse_whitespace(&text)
}

fn inside_boilerplate(element: &ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| is_boilerplate(&ancestor))
}

fn is_boilerplate(element: &ElementRef<'_>) -> bool {
    let value = element.value();
    BOILERPLATE_TAGS.contains(&value.name())
        || value
            .classes()
            .any(|class| BOILERPLATE_CLASSES.contains(&class))
}

/// Up to `max_links` distinct same-domain http(s) links without fragments
fn extract_links(document: &Html, page_url: &Url, max_links: usize) -> Vec<Url> {
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return links;
    };

    for element in document.select(&a_selector) {
        if links.len() >= max_links {
            break;
        }

        if element.value().attr("download").is_some() {
            continue;
        }

        let Some(link) = element
            .value()
            .attr("href")
            .and_then(|href| resolve_link(href, page_url))
        else {
            continue;
        };

        if !same_domain(page_url, &link) || link == *page_url {
            continue;
        }

        if seen.insert(link.as_str().to_string()) {
            links.push(link);
        }
    }

    links
}

/// Resolves an href against the page URL
///
/// Returns None for `javascript:`, `mailto:`, `tel:` and `data:` links,
/// anything carrying a fragment, and non-http(s) results.
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.contains('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let absolute = base_url.join(href).ok()?;
    canonicalize_url(absolute.as_str()).ok()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].trim_end().to_string(),
        None => text.to_string(),
    }
}
