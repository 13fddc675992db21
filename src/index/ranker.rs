//! BM25 scoring and result projection

use crate::config::RankingConfig;
use crate::crawler::Document;
use crate::index::inverted::{DocId, DocumentFrequency, InvertedIndex};
use crate::index::tokenizer::tokenize;
use crate::search::SearchResult;
use std::cmp::Ordering;
use std::collections::HashMap;

/// BM25 tuning parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
    /// Term frequency saturation
    pub k1: f64,
    /// Length normalization strength
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

impl From<&RankingConfig> for Bm25Params {
    fn from(config: &RankingConfig) -> Self {
        Self {
            k1: config.k1,
            b: config.b,
        }
    }
}

/// A scored document, before the score is stripped for the caller
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub score: f64,
}

impl RankedResult {
    pub fn into_search_result(self) -> SearchResult {
        SearchResult {
            title: self.title,
            url: self.url,
            snippet: self.snippet,
        }
    }
}

/// Inverse document frequency: `ln(total_docs / doc_freq)`
///
/// A missing or zero document frequency counts as 1.
pub fn idf(total_docs: usize, doc_freq: Option<u32>) -> f64 {
    let df = doc_freq.unwrap_or(1).max(1);
    (total_docs as f64 / df as f64).ln()
}

/// BM25 contribution of one term to one document
pub fn bm25_term(tf: u32, idf: f64, doc_len: f64, avg_doc_len: f64, params: Bm25Params) -> f64 {
    let tf = tf as f64;
    let norm_len = doc_len / avg_doc_len;
    let numerator = tf * (params.k1 + 1.0);
    let denominator = tf + params.k1 * (1.0 - params.b + params.b * norm_len);
    idf * (numerator / denominator)
}

/// Content length in characters, the unit BM25 normalizes by
fn doc_len(doc: &Document) -> f64 {
    doc.content.chars().count() as f64
}

/// Scores every document that contains at least one query term
///
/// Contributions from repeated query terms add up. Documents without any
/// query term do not appear in the map.
pub fn score_documents(
    documents: &[Document],
    index: &InvertedIndex,
    doc_freq: &DocumentFrequency,
    query: &str,
    params: Bm25Params,
) -> HashMap<DocId, f64> {
    let mut scores: HashMap<DocId, f64> = HashMap::new();
    let total_docs = documents.len().max(1);
    let avg_doc_len = if documents.is_empty() {
        1.0
    } else {
        (documents.iter().map(doc_len).sum::<f64>() / documents.len() as f64).max(1.0)
    };

    for token in tokenize(query) {
        let Some(postings) = index.postings(&token) else {
            continue;
        };

        let term_idf = idf(total_docs, doc_freq.get(&token));

        for (&doc_id, &tf) in postings {
            let Some(doc) = documents.get(doc_id) else {
                continue;
            };
            let contribution = bm25_term(tf, term_idf, doc_len(doc), avg_doc_len, params);
            *scores.entry(doc_id).or_insert(0.0) += contribution;
        }
    }

    scores
}

/// Ranks `documents` against `query` and returns the top `limit` results
///
/// Equal scores keep crawl order (lower `DocId` first) so the output is
/// reproducible.
///
/// # Arguments
///
/// * `documents` - The session's documents; a `DocId` is an index into it
/// * `index` - Postings built from `documents`
/// * `doc_freq` - Document frequencies built from `documents`
/// * `query` - Raw query text, tokenized like the documents
/// * `config` - BM25 parameters and snippet length
/// * `limit` - Maximum number of results
pub fn rank(
    documents: &[Document],
    index: &InvertedIndex,
    doc_freq: &DocumentFrequency,
    query: &str,
    config: &RankingConfig,
    limit: usize,
) -> Vec<RankedResult> {
    let scores = score_documents(documents, index, doc_freq, query, Bm25Params::from(config));

    let mut scored: Vec<(DocId, f64)> = scores.into_iter().collect();
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    scored
        .into_iter()
        .take(limit)
        .map(|(doc_id, score)| {
            let doc = &documents[doc_id];
            RankedResult {
                title: doc.title.clone(),
                url: doc.url.clone(),
                snippet: make_snippet(&doc.content, config.snippet_chars),
                score,
            }
        })
        .collect()
}

/// Leading `max_chars` characters of `content` followed by an ellipsis
pub fn make_snippet(content: &str, max_chars: usize) -> String {
    let mut snippet: String = content.chars().take(max_chars).collect();
    snippet.push_str("...");
    snippet
}
