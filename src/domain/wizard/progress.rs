//! Progress through the role-filtered question list.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// Progress indicator shown above each question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Questions with a recorded answer.
    pub answered: usize,
    pub total: usize,
    /// Position of the current question within the list.
    pub current_index: usize,
    /// Share of the list before the current question.
    pub percentage: Percentage,
    /// Questions from the current one to the end, inclusive.
    pub remaining: usize,
}

impl Progress {
    pub fn new(current_index: usize, answered: usize, total: usize) -> Self {
        Self {
            answered: answered.min(total),
            total,
            current_index,
            percentage: Percentage::of(current_index, total),
            remaining: total.saturating_sub(current_index),
        }
    }

    /// Returns true when the current question is the last one.
    pub fn is_on_last_question(&self) -> bool {
        self.total > 0 && self.current_index + 1 >= self.total
    }
}
