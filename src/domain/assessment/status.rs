//! AssessmentStatus enum for tracking the lifecycle of an assessment session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of an assessment session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentStatus {
    #[default]
    New,
    InProgress,
    Completed,
}

impl AssessmentStatus {
    /// Returns true if the session can still be modified.
    pub fn is_mutable(&self) -> bool {
        !matches!(self, AssessmentStatus::Completed)
    }
}

impl StateMachine for AssessmentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentStatus::*;
        matches!((self, target), (New, InProgress) | (InProgress, Completed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AssessmentStatus::*;
        match self {
            New => vec![InProgress],
            InProgress => vec![Completed],
            Completed => vec![],
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssessmentStatus::New => "new",
            AssessmentStatus::InProgress => "in-progress",
            AssessmentStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}
