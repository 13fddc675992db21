//! URL handling module for Bubble Search
//!
//! Canonical visited-set keys and exact-host domain comparison.

mod domain;
mod normalize;

pub use domain::{extract_domain, same_domain};
pub use normalize::canonicalize_url;
