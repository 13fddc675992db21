//! Request parameters and JSON response bodies

use crate::search::SearchResult;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Search parameters merged from the query string and an optional JSON body
///
/// Query-string values take precedence over body values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: Option<String>,

    /// None when absent or unparseable
    pub limit: Option<i64>,
}

impl SearchParams {
    pub fn from_query_string(params: &HashMap<String, String>) -> Self {
        Self {
            query: params.get("query").and_then(|q| non_blank(q)),
            limit: params.get("limit").and_then(|l| parse_limit_str(l)),
        }
    }

    /// Parses a JSON body; anything other than an object contributes nothing
    pub fn from_json_body(body: &[u8]) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };

        Self {
            query: map.get("query").and_then(Value::as_str).and_then(non_blank),
            limit: map.get("limit").and_then(parse_limit_value),
        }
    }

    /// Fills in whatever `self` is missing from `other`
    pub fn or(self, other: SearchParams) -> Self {
        Self {
            query: self.query.or(other.query),
            limit: self.limit.or(other.limit),
        }
    }

    /// Resolves the requested result count, clamped below at 1
    pub fn limit_or(&self, default: usize) -> usize {
        match self.limit {
            Some(n) if n < 1 => 1,
            Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
            None => default,
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_limit_str(s: &str) -> Option<i64> {
    let s = s.trim();
    s.parse::<i64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
}

fn parse_limit_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => parse_limit_str(s),
        _ => None,
    }
}

/// Successful search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub results: Vec<SearchResult>,
    pub count: usize,

    /// RFC 3339 response time
    pub timestamp: String,
}

impl SearchResponse {
    pub fn new(query: String, results: Vec<SearchResult>) -> Self {
        Self {
            success: true,
            query,
            count: results.len(),
            results,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error body shared by 400 and 500 responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub results: Vec<SearchResult>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            results: Vec::new(),
        }
    }
}
