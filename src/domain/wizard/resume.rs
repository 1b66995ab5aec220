//! Where a resumed assessment picks up.

use std::collections::HashSet;

use crate::domain::assessment::{Answer, Question};

/// Index of the question to show when an assessment is resumed.
///
/// The first question without an answer, or the last question when every
/// one is answered so the respondent can review before completing. `None`
/// only for an empty question list.
pub fn resume_index(questions: &[Question], answers: &[Answer]) -> Option<usize> {
    if questions.is_empty() {
        return None;
    }
    let answered: HashSet<&str> = answers.iter().map(|a| a.question_id.as_str()).collect();
    questions
        .iter()
        .position(|q| !answered.contains(q.id.as_str()))
        .or(Some(questions.len() - 1))
}
