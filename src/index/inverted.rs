//! In-memory inverted index over one session's documents

use crate::crawler::Document;
use crate::index::tokenizer::tokens;
use std::collections::HashMap;

/// Position of a document in the session's document list
pub type DocId = usize;

/// term → (document → term frequency)
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, HashMap<DocId, u32>>,
}

impl InvertedIndex {
    /// Documents containing `term`, with in-document frequencies
    pub fn postings(&self, term: &str) -> Option<&HashMap<DocId, u32>> {
        self.postings.get(term)
    }

    /// Frequency of `term` in `doc`, zero when absent
    pub fn term_frequency(&self, term: &str, doc: DocId) -> u32 {
        self.postings
            .get(term)
            .and_then(|docs| docs.get(&doc))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

/// term → number of documents containing it at least once
#[derive(Debug, Clone, Default)]
pub struct DocumentFrequency {
    counts: HashMap<String, u32>,
}

impl DocumentFrequency {
    /// Document frequency of `term`, `None` if no document contains it
    pub fn get(&self, term: &str) -> Option<u32> {
        self.counts.get(term).copied()
    }
}

/// Builds the inverted index and document-frequency table for `documents`
///
/// Titles are indexed twice so that title matches weigh double. `DocId`s
/// are positions in the `documents` slice.
pub fn build_index(documents: &[Document]) -> (InvertedIndex, DocumentFrequency) {
    let mut index = InvertedIndex::default();
    let mut doc_freq = DocumentFrequency::default();

    for (doc_id, doc) in documents.iter().enumerate() {
        let text = format!("{} {} {}", doc.title, doc.title, doc.content);

        let mut term_freq: HashMap<String, u32> = HashMap::new();
        for token in tokens(&text) {
            *term_freq.entry(token).or_insert(0) += 1;
        }

        for (term, freq) in term_freq {
            *doc_freq.counts.entry(term.clone()).or_insert(0) += 1;
            index.postings.entry(term).or_default().insert(doc_id, freq);
        }
    }

    (index, doc_freq)
}
