//! Lifecycle of a query session's crawl

use std::fmt;

/// `Idle → Crawling → Complete`; no other transition is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// Session created, nothing dispatched yet
    Idle,

    /// Seeds dispatched; fetch branches may be outstanding
    Crawling,

    /// Deadline reached or frontier exhausted; the document set is final
    Complete,
}

impl SessionPhase {
    /// Returns true if moving to `next` is a valid transition
    pub fn can_transition_to(&self, next: SessionPhase) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Crawling) | (Self::Crawling, Self::Complete)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Crawling => "crawling",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
