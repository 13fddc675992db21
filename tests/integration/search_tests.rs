//! End-to-end search: seeds → crawl → index → rank → cache

use crate::common::{engine, html_page, test_config, COOKING_TEXT, JAVASCRIPT_TEXT};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, route: &str, html: String, expected: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_relevant_page_ranks_first() {
    let server = MockServer::start().await;
    mount_page(&server, "/js", html_page("JavaScript Closures", JAVASCRIPT_TEXT, &[]), 1).await;
    mount_page(&server, "/cooking", html_page("Slow Cooking", COOKING_TEXT, &[]), 1).await;

    let config = test_config(&server, "javascript", &["/cooking", "/js"]);
    let results = engine(&config).search("javascript closures", 10).await.unwrap();

    assert!(!results.is_empty());
    assert_eq!(results[0].url, format!("{}/js", server.uri()));
    assert_eq!(results[0].title, "JavaScript Closures");
    assert!(results[0].snippet.ends_with("..."));
    assert!(results.iter().all(|r| !r.url.ends_with("/cooking")));
}

#[tokio::test]
async fn test_javascript_query_ranks_wikipedia_over_cooking() {
    let server = MockServer::start().await;
    let wiki_text = "JavaScript is a programming language of the web. Browsers run \
        JavaScript natively, Node.js runs JavaScript on servers, and most sites ship \
        JavaScript bundles. Learning JavaScript opens many doors.";
    assert_eq!(wiki_text.matches("JavaScript").count(), 5);

    mount_page(&server, "/wiki", html_page("JavaScript - Wikipedia", wiki_text, &[]), 1).await;
    mount_page(&server, "/recipes", html_page("Cooking Recipes", COOKING_TEXT, &[]), 1).await;

    let config = test_config(&server, "javascript", &["/recipes", "/wiki"]);
    let results = engine(&config).search("javascript", 10).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "JavaScript - Wikipedia");
    assert_eq!(results[0].url, format!("{}/wiki", server.uri()));
}

#[tokio::test]
async fn test_repeat_query_crawls_once() {
    let server = MockServer::start().await;
    mount_page(&server, "/js", html_page("JavaScript Closures", JAVASCRIPT_TEXT, &[]), 1).await;
    mount_page(&server, "/cooking", html_page("Slow Cooking", COOKING_TEXT, &[]), 1).await;

    let config = test_config(&server, "javascript", &["/js", "/cooking"]);
    let engine = engine(&config);

    let first = engine.search("JavaScript closures", 10).await.unwrap();
    let second = engine.search("  javascript CLOSURES ", 10).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(engine.cache().len(), 1);

    let stats = engine
        .cache()
        .get("javascript closures")
        .and_then(|entry| entry.stats)
        .unwrap();
    assert_eq!(stats.pages_indexed, 2);
}

#[tokio::test]
async fn test_limit_truncates_results() {
    let server = MockServer::start().await;
    for route in ["/one", "/two", "/three"] {
        mount_page(&server, route, html_page("JavaScript", JAVASCRIPT_TEXT, &[]), 1).await;
    }

    let config = test_config(&server, "javascript", &["/one", "/two", "/three"]);
    let engine = engine(&config);

    assert_eq!(engine.search("javascript", 2).await.unwrap().len(), 2);
    assert_eq!(engine.search("javascript", 0).await.unwrap().len(), 1);
    assert_eq!(engine.search("javascript", 100).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_empty_crawl_falls_back_to_seeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(4)
        .mount(&server)
        .await;

    let config = test_config(&server, "javascript", &["/a", "/b"]);
    let engine = engine(&config);

    let results = engine.search("javascript", 10).await.unwrap();
    let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/a", server.uri()).as_str(),
            format!("{}/b", server.uri()).as_str()
        ]
    );
    assert_eq!(results[0].title, "Resource: 127.0.0.1");
    assert_eq!(results[0].snippet, "Related resource for your query");

    // fallbacks are not cached, so the second query crawls again
    engine.search("javascript", 10).await.unwrap();
    assert!(engine.cache().is_empty());
}

#[tokio::test]
async fn test_no_matching_document_points_elsewhere() {
    let server = MockServer::start().await;
    mount_page(&server, "/cooking", html_page("Slow Cooking", COOKING_TEXT, &[]), 1).await;

    let config = test_config(&server, "zebra", &["/cooking"]);
    let results = engine(&config).search("zebra", 10).await.unwrap();

    assert_eq!(results.len(), 1);
    assert!(results[0].url.starts_with("https://duckduckgo.com/?q=zebra"));
}

#[tokio::test]
async fn test_no_seeds_points_elsewhere_without_crawling() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = test_config(&server, "braise", &["/cooking"]);
    let results = engine(&config).search("quantum physics", 10).await.unwrap();

    assert_eq!(results.len(), 1);
    assert!(results[0].title.contains("quantum physics"));
}
