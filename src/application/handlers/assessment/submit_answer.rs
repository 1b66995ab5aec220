//! SubmitAnswerHandler - Record one answer and advance.

use std::sync::Arc;

use tracing::{debug, error};

use super::AssessmentError;
use crate::domain::assessment::{Answer, AnswerValue};
use crate::domain::wizard::WizardState;
use crate::ports::SessionRepository;

/// Command to answer (or re-answer) a question.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub question_id: String,
    pub value: AnswerValue,
}

/// Handler for answer submissions.
///
/// A role must be selected and the question must belong to the session's
/// role-filtered list. Earlier answers to the same question are replaced.
pub struct SubmitAnswerHandler {
    repository: Arc<dyn SessionRepository>,
}

impl SubmitAnswerHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self, state, cmd), fields(question_id = %cmd.question_id))]
    pub async fn handle(
        &self,
        state: &WizardState,
        cmd: SubmitAnswerCommand,
    ) -> Result<WizardState, AssessmentError> {
        let Some(current) = state.session() else {
            debug!("no session loaded, ignoring answer");
            return Ok(state.clone());
        };

        let mut session = current.clone();
        let replaced = session.record_answer(Answer::new(cmd.question_id.clone(), cmd.value))?;

        if state.position_of(&cmd.question_id).is_none() {
            return Err(AssessmentError::unknown_question(cmd.question_id));
        }
        let next = state.answer_recorded(session.clone(), &cmd.question_id)?;

        if let Err(err) = self.repository.save(&session).await {
            error!(code = %session.code(), error = %err, "failed to save answer");
            return Err(err.into());
        }

        debug!(replaced, "answer recorded");
        Ok(next)
    }
}
