//! Integration tests for Bubble Search
//!
//! Mock HTTP servers stand in for the web; the crate is exercised through
//! its public API and HTTP router.

mod common;
mod crawl_tests;
mod ranking_props;
mod search_tests;
mod server_tests;
