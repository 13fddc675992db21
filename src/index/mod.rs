//! Indexing and ranking
//!
//! Everything here is built fresh for each query session from the documents
//! that session crawled, and dropped when the query completes.

mod inverted;
mod ranker;
mod tokenizer;

pub use inverted::{build_index, DocId, DocumentFrequency, InvertedIndex};
pub use ranker::{
    bm25_term, idf, make_snippet, rank, score_documents, Bm25Params, RankedResult,
};
pub use tokenizer::{is_stop_word, tokenize, tokens, MIN_TOKEN_LEN};
