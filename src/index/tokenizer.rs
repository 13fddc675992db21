//! Text → index terms

/// Tokens shorter than this are dropped
pub const MIN_TOKEN_LEN: usize = 3;

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with", "from", "has", "have", "had", "do", "does",
    "did", "page",
];

/// Returns true if the token is in the fixed stop-word set
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Lazily yields the index terms of `text`
///
/// Text is lowercased, anything other than ASCII letters and digits acts as
/// a separator, and tokens under three characters or in the stop-word set
/// are skipped.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|raw| raw.len() >= MIN_TOKEN_LEN)
        .map(|raw| raw.to_ascii_lowercase())
        .filter(|token| !is_stop_word(token))
}

/// Collects the index terms of `text` in order
pub fn tokenize(text: &str) -> Vec<String> {
    tokens(text).collect()
}
