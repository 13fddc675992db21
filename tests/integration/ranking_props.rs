//! Property tests for scoring and caching invariants

use bubble_search::config::CacheConfig;
use bubble_search::index::{bm25_term, tokenize, Bm25Params, MIN_TOKEN_LEN};
use bubble_search::{QueryCache, SearchResult};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bm25_is_monotone_in_term_frequency(
        tf in 1u32..200,
        idf in 0.0f64..10.0,
        doc_len in 1.0f64..10_000.0,
        avg_len in 1.0f64..10_000.0,
    ) {
        let params = Bm25Params::default();
        let lower = bm25_term(tf, idf, doc_len, avg_len, params);
        let higher = bm25_term(tf + 1, idf, doc_len, avg_len, params);
        prop_assert!(higher >= lower);
    }

    #[test]
    fn bm25_is_bounded_by_saturation(
        tf in 1u32..10_000,
        idf in 0.0f64..10.0,
        doc_len in 1.0f64..10_000.0,
        avg_len in 1.0f64..10_000.0,
    ) {
        let params = Bm25Params::default();
        let score = bm25_term(tf, idf, doc_len, avg_len, params);
        prop_assert!(score <= idf * (params.k1 + 1.0) + 1e-9);
    }

    #[test]
    fn tokens_are_lowercase_and_long_enough(text in "\\PC{0,200}") {
        for token in tokenize(&text) {
            prop_assert!(token.len() >= MIN_TOKEN_LEN);
            prop_assert!(token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn cache_never_exceeds_capacity(capacity in 1usize..20, inserts in 0usize..60) {
        let cache = QueryCache::new(&CacheConfig { ttl_secs: 300, capacity });
        for i in 0..inserts {
            cache.put(&format!("query {}", i), Vec::<SearchResult>::new(), None);
        }
        prop_assert!(cache.len() <= capacity);
        prop_assert_eq!(cache.len(), inserts.min(capacity));
    }
}
