//! SubmitUserInfoHandler - Save the respondent's profile.

use std::sync::Arc;

use tracing::{debug, error};

use super::AssessmentError;
use crate::domain::assessment::UserInfo;
use crate::domain::wizard::WizardState;
use crate::ports::SessionRepository;

/// Command to attach a profile to the current session.
#[derive(Debug, Clone)]
pub struct SubmitUserInfoCommand {
    pub user_info: UserInfo,
}

/// Handler for the profile step.
pub struct SubmitUserInfoHandler {
    repository: Arc<dyn SessionRepository>,
}

impl SubmitUserInfoHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip_all)]
    pub async fn handle(
        &self,
        state: &WizardState,
        cmd: SubmitUserInfoCommand,
    ) -> Result<WizardState, AssessmentError> {
        let Some(current) = state.session() else {
            debug!("no session loaded, ignoring user info");
            return Ok(state.clone());
        };

        let mut session = current.clone();
        session.attach_user_info(cmd.user_info)?;
        let next = state.user_info_saved(session.clone())?;

        if let Err(err) = self.repository.save(&session).await {
            error!(code = %session.code(), error = %err, "failed to save user info");
            return Err(err.into());
        }

        Ok(next)
    }
}
