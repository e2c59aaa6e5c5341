//! Best score of the session
//!
//! Kept in memory only; it survives scene restarts but not the process.

use serde::{Deserialize, Serialize};

/// Highscore tracker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highscore {
    best: u64,
    /// Finished runs recorded so far
    runs: u32,
}

impl Highscore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best score so far (0 before any run)
    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Check if a score would raise the highscore
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished run; returns true when it set a new best
    pub fn record(&mut self, score: u64) -> bool {
        self.runs += 1;
        if self.qualifies(score) {
            self.best = score;
            true
        } else {
            false
        }
    }
}
