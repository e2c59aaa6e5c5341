//! One-shot delayed callbacks driven by simulation time

use serde::{Deserialize, Serialize};

use super::events::TimerId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Scheduled {
    id: TimerId,
    due_ms: f64,
}

/// Pending one-shot timers for the current scene
///
/// Timers fire at most once. There is no cancellation: a timer lives until
/// it fires or the scene (and with it this scheduler) is rebuilt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timers {
    pending: Vec<Scheduled>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `id` to fire `delay_ms` after `now_ms`
    pub fn schedule(&mut self, id: TimerId, now_ms: f64, delay_ms: f64) {
        self.pending.push(Scheduled {
            id,
            due_ms: now_ms + delay_ms,
        });
    }

    /// Remove and return every timer whose deadline has passed, in deadline order
    pub fn take_due(&mut self, now_ms: f64) -> Vec<TimerId> {
        let mut due: Vec<Scheduled> = Vec::new();
        self.pending.retain(|t| {
            if t.due_ms <= now_ms {
                due.push(t.clone());
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms));
        due.into_iter().map(|t| t.id).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
