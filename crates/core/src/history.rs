//! Cross-run performance tracker: the last few completed-run scores and the best score.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

pub const RECENT_SCORE_CAPACITY: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreHistory {
    high_score: u64,
    runs_recorded: u64,
    recent: VecDeque<u64>,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, score: u64) {
        self.recent.push_back(score);
        while self.recent.len() > RECENT_SCORE_CAPACITY {
            self.recent.pop_front();
        }
        self.high_score = self.high_score.max(score);
        self.runs_recorded += 1;
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn runs_recorded(&self) -> u64 {
        self.runs_recorded
    }

    /// Oldest first.
    pub fn recent(&self) -> impl Iterator<Item = u64> + '_ {
        self.recent.iter().copied()
    }

    pub fn last(&self) -> Option<u64> {
        self.recent.back().copied()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.recent.is_empty() {
            return None;
        }
        let total: u64 = self.recent.iter().sum();
        Some(total as f64 / self.recent.len() as f64)
    }

    /// Re-apply the capacity bound after loading from an untrusted source.
    pub fn normalized(mut self) -> Self {
        while self.recent.len() > RECENT_SCORE_CAPACITY {
            self.recent.pop_front();
        }
        if let Some(best) = self.recent.iter().copied().max() {
            self.high_score = self.high_score.max(best);
        }
        self
    }
}
