//! SelectRoleHandler - Pick a role and start answering.

use std::sync::Arc;

use tracing::{debug, error};

use super::AssessmentError;
use crate::domain::assessment::Role;
use crate::domain::wizard::WizardState;
use crate::ports::{QuestionCatalog, SessionRepository};

/// Command to select the respondent's role.
#[derive(Debug, Clone, Copy)]
pub struct SelectRoleCommand {
    pub role: Role,
}

/// Handler for the role step.
///
/// Selecting a role moves the session to in-progress and loads the questions
/// for that role, positioned at the first one still unanswered.
pub struct SelectRoleHandler {
    repository: Arc<dyn SessionRepository>,
    catalog: Arc<dyn QuestionCatalog>,
}

impl SelectRoleHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, catalog: Arc<dyn QuestionCatalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    #[tracing::instrument(skip(self, state), fields(role = %cmd.role))]
    pub async fn handle(
        &self,
        state: &WizardState,
        cmd: SelectRoleCommand,
    ) -> Result<WizardState, AssessmentError> {
        let Some(current) = state.session() else {
            debug!("no session loaded, ignoring role selection");
            return Ok(state.clone());
        };

        let mut session = current.clone();
        session.select_role(cmd.role)?;

        let questions = self
            .catalog
            .questions_for_role(cmd.role)
            .await
            .map_err(AssessmentError::catalog)?;

        let next = state.role_selected(session.clone(), questions)?;

        if let Err(err) = self.repository.save(&session).await {
            error!(code = %session.code(), error = %err, "failed to save role");
            return Err(err.into());
        }

        Ok(next)
    }
}
