use bubble_search::config::{Config, TopicEntry};
use bubble_search::crawler::HttpFetcher;
use bubble_search::search::{LiveCrawl, SearchEngine};
use bubble_search::QueryCache;
use std::sync::Arc;
use wiremock::MockServer;

/// An HTML page with enough body text to pass the extractor threshold
pub fn html_page(title: &str, body: &str, links: &[&str]) -> String {
    let anchors: String = links
        .iter()
        .map(|href| format!(r#"<a href="{}">more</a>"#, href))
        .collect();
    format!(
        "<html><head><title>{}</title></head><body>\
         <nav>Home Blog About</nav><main><p>{}</p>{}</main>\
         <footer>Copyright</footer></body></html>",
        title, body, anchors
    )
}

/// Config whose only topic points at `paths` on the mock server
pub fn test_config(server: &MockServer, topic: &str, paths: &[&str]) -> Config {
    let mut config = Config::default();
    config.seeds.topics = vec![TopicEntry {
        name: topic.to_string(),
        urls: paths
            .iter()
            .map(|p| format!("{}{}", server.uri(), p))
            .collect(),
    }];
    config.seeds.defaults = Vec::new();
    config.crawler.crawl_timeout_ms = 3_000;
    config.fetcher.request_timeout_ms = 2_000;
    config
}

pub fn engine(config: &Config) -> SearchEngine {
    let fetcher = HttpFetcher::new(&config.fetcher).expect("client builds");
    let source = LiveCrawl::with_fetcher(config, Arc::new(fetcher));
    SearchEngine::new(Arc::new(source), QueryCache::new(&config.cache), &config.server)
}

pub const JAVASCRIPT_TEXT: &str = "JavaScript closures capture variables from the enclosing \
    scope. A JavaScript closure keeps those variables alive after the outer function returns, \
    which is how JavaScript modules hide private state.";

pub const COOKING_TEXT: &str = "Slow cooking turns tough cuts tender. Braise the meat with \
    onions, garlic, stock and wine, then simmer gently for three hours until the sauce \
    thickens and the kitchen smells wonderful.";
