//! Crawl behaviour against mock sites

use crate::common::{html_page, COOKING_TEXT, JAVASCRIPT_TEXT};
use bubble_search::config::{CrawlerConfig, ExtractorConfig};
use bubble_search::crawler::{Coordinator, HttpFetcher};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn coordinator(crawler: CrawlerConfig) -> Coordinator {
    let config = bubble_search::Config::default();
    let fetcher = HttpFetcher::new(&config.fetcher).expect("client builds");
    Coordinator::new(Arc::new(fetcher), ExtractorConfig::default(), crawler)
}

fn seed(server: &MockServer, route: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), route)).unwrap()
}

async fn mount_page(server: &MockServer, route: &str, html: String, expected: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_cyclic_links_fetched_once() {
    let server = MockServer::start().await;

    mount_page(&server, "/", html_page("Root", JAVASCRIPT_TEXT, &["/a", "/b"]), 1).await;
    mount_page(&server, "/a", html_page("A", JAVASCRIPT_TEXT, &["/", "/b"]), 1).await;
    mount_page(&server, "/b", html_page("B", JAVASCRIPT_TEXT, &["/", "/a"]), 1).await;

    let outcome = coordinator(CrawlerConfig::default())
        .crawl(&[seed(&server, "/")])
        .await
        .unwrap();

    assert_eq!(outcome.documents.len(), 3);
    assert_eq!(outcome.stats.pages_visited, 3);
}

#[tokio::test]
async fn test_page_budget_bounds_requests() {
    let server = MockServer::start().await;
    let links = ["/p1", "/p2", "/p3", "/p4", "/p5"];

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(html_page("Page", COOKING_TEXT, &links)),
        )
        .mount(&server)
        .await;

    let crawler = CrawlerConfig {
        max_pages: 4,
        ..CrawlerConfig::default()
    };
    let outcome = coordinator(crawler).crawl(&[seed(&server, "/")]).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 4);
    assert_eq!(outcome.stats.pages_visited, 4);
    assert!(outcome.documents.len() <= 4);
}

#[tokio::test]
async fn test_indexed_documents_respect_content_bounds() {
    let server = MockServer::start().await;
    let long_text = "tokio runtime scheduling ".repeat(400);

    mount_page(&server, "/long", html_page("Long", &long_text, &[]), 1).await;
    mount_page(&server, "/short", html_page("Short", "too little", &[]), 1).await;

    let outcome = coordinator(CrawlerConfig::default())
        .crawl(&[seed(&server, "/long"), seed(&server, "/short")])
        .await
        .unwrap();

    assert_eq!(outcome.documents.len(), 1);
    let chars = outcome.documents[0].content_chars();
    assert!((100..=5_000).contains(&chars));
    assert_eq!(outcome.stats.rejected, 1);
}

#[tokio::test]
async fn test_deadline_returns_what_finished() {
    let server = MockServer::start().await;

    mount_page(&server, "/fast", html_page("Fast", JAVASCRIPT_TEXT, &[]), 1).await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page("Slow", JAVASCRIPT_TEXT, &[]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let crawler = CrawlerConfig {
        crawl_timeout_ms: 600,
        ..CrawlerConfig::default()
    };

    let started = Instant::now();
    let outcome = coordinator(crawler)
        .crawl(&[seed(&server, "/fast"), seed(&server, "/slow")])
        .await
        .unwrap();

    assert!(started.elapsed() < Duration::from_secs(3));
    assert!(outcome.stats.timed_out);
    let titles: Vec<&str> = outcome.documents.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Fast"]);
}

#[tokio::test]
async fn test_failed_fetches_do_not_abort_crawl() {
    let server = MockServer::start().await;

    mount_page(&server, "/ok", html_page("Ok", COOKING_TEXT, &[]), 1).await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let outcome = coordinator(CrawlerConfig::default())
        .crawl(&[seed(&server, "/broken"), seed(&server, "/ok")])
        .await
        .unwrap();

    assert_eq!(outcome.documents.len(), 1);
    assert_eq!(outcome.stats.fetch_failures, 1);
}
