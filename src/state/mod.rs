//! State management for query sessions
//!
//! This module contains the session lifecycle phases and the per-query
//! crawl state that is created at query entry and dropped at query exit.

mod phase;
mod session;

pub use phase::SessionPhase;
pub use session::CrawlSession;
