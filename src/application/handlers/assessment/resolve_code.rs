//! ResolveCodeHandler - Enter or resume an assessment by access code.

use std::sync::Arc;

use tracing::debug;

use super::AssessmentError;
use crate::domain::assessment::{AssessmentStatus, ScoringEngine, Session};
use crate::domain::foundation::AccessCode;
use crate::domain::wizard::WizardState;
use crate::ports::{QuestionCatalog, SessionRepository};

/// Command carrying the code as typed by the respondent.
#[derive(Debug, Clone)]
pub struct ResolveCodeCommand {
    pub code: String,
}

/// Handler that loads (or starts) the session behind an access code.
///
/// A code with no stored record starts a fresh session in the current UI
/// language. The fresh session is not saved until its first mutation.
pub struct ResolveCodeHandler {
    repository: Arc<dyn SessionRepository>,
    catalog: Arc<dyn QuestionCatalog>,
}

impl ResolveCodeHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, catalog: Arc<dyn QuestionCatalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    #[tracing::instrument(skip(self, state, cmd), fields(code = %cmd.code.trim()))]
    pub async fn handle(
        &self,
        state: &WizardState,
        cmd: ResolveCodeCommand,
    ) -> Result<WizardState, AssessmentError> {
        let code = AccessCode::new(&cmd.code)
            .map_err(|e| AssessmentError::invalid_access_code(e.to_string()))?;

        let session = match self.repository.find(&code).await? {
            Some(session) => session,
            None => {
                debug!("no stored session, starting a new one");
                Session::new(code, state.language())
            }
        };

        let mut questions = Vec::new();
        let mut result = None;
        match (session.status(), session.role()) {
            (AssessmentStatus::Completed, _) => {
                result = Some(ScoringEngine::score(self.catalog.catalog(), session.answers()));
            }
            (AssessmentStatus::InProgress, Some(role)) => {
                questions = self
                    .catalog
                    .questions_for_role(role)
                    .await
                    .map_err(AssessmentError::catalog)?;
            }
            _ => {}
        }

        Ok(state.resolved(session, questions, result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::StaticQuestionCatalog;
    use crate::adapters::storage::{InMemoryKeyValueStore, KeyValueSessionRepository};
    use crate::domain::assessment::{Answer, Language, MaturityLevel, Role};
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::domain::wizard::WizardStep;
    use async_trait::async_trait;

    struct UnreachableRepository;

    #[async_trait]
    impl SessionRepository for UnreachableRepository {
        async fn find(&self, _code: &AccessCode) -> Result<Option<Session>, DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "connection refused"))
        }

        async fn save(&self, _session: &Session) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "connection refused"))
        }
    }

    fn setup() -> (ResolveCodeHandler, Arc<KeyValueSessionRepository>) {
        let repository = Arc::new(KeyValueSessionRepository::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )));
        let handler = ResolveCodeHandler::new(
            repository.clone(),
            Arc::new(StaticQuestionCatalog::standard()),
        );
        (handler, repository)
    }

    fn command(code: &str) -> ResolveCodeCommand {
        ResolveCodeCommand {
            code: code.to_string(),
        }
    }

    fn code() -> AccessCode {
        AccessCode::new("ACME-1").unwrap()
    }

    #[tokio::test]
    async fn unknown_code_starts_new_session_without_saving() {
        let (handler, repository) = setup();
        let state = WizardState::new(Language::Ar).started().unwrap();

        let next = handler.handle(&state, command(" acme-1 ")).await.unwrap();

        assert_eq!(next.step(), WizardStep::UserInfo);
        let session = next.session().unwrap();
        assert_eq!(session.code().as_str(), "ACME-1");
        assert_eq!(session.language(), Language::Ar);
        assert!(repository.find(&code()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn in_progress_session_resumes_at_first_unanswered() {
        let (handler, repository) = setup();
        let mut session = Session::new(code(), Language::Ar);
        session.select_role(Role::Compliance).unwrap();
        session.record_answer(Answer::numeric("q1", 4).unwrap()).unwrap();
        repository.save(&session).await.unwrap();

        let state = WizardState::new(Language::En).started().unwrap();
        let next = handler.handle(&state, command("ACME-1")).await.unwrap();

        assert_eq!(next.step(), WizardStep::Assessment);
        assert_eq!(next.language(), Language::Ar);
        assert_eq!(next.questions().len(), 4);
        assert_eq!(next.current_question().unwrap().id, "q4");
        assert!(next.result().is_none());
    }

    #[tokio::test]
    async fn completed_session_goes_to_results_with_score() {
        let (handler, repository) = setup();
        let mut session = Session::new(code(), Language::En);
        session.select_role(Role::Compliance).unwrap();
        session.record_answer(Answer::numeric("q1", 3).unwrap()).unwrap();
        session.complete().unwrap();
        repository.save(&session).await.unwrap();

        let state = WizardState::default().started().unwrap();
        let next = handler.handle(&state, command("acme-1")).await.unwrap();

        assert_eq!(next.step(), WizardStep::Results);
        let result = next.result().unwrap();
        assert_eq!(result.overall_score, 3.0);
        assert_eq!(result.maturity_level, MaturityLevel::Defined);
    }

    #[tokio::test]
    async fn malformed_code_is_retryable_and_leaves_state_alone() {
        let (handler, _) = setup();
        let state = WizardState::new(Language::En).started().unwrap();

        let err = handler.handle(&state, command("   ")).await.unwrap_err();

        assert!(matches!(err, AssessmentError::InvalidAccessCode(_)));
        assert!(err.is_retryable());
        assert_eq!(state.step(), WizardStep::CodeEntry);
    }

    #[tokio::test]
    async fn resolving_outside_code_entry_is_invalid_state() {
        let (handler, _) = setup();

        let err = handler
            .handle(&WizardState::default(), command("ACME-1"))
            .await
            .unwrap_err();

        assert!(matches!(err, AssessmentError::InvalidState(_)));
    }

    #[tokio::test]
    async fn storage_failure_surfaces_as_persistence_error() {
        let handler = ResolveCodeHandler::new(
            Arc::new(UnreachableRepository),
            Arc::new(StaticQuestionCatalog::standard()),
        );

        let err = handler
            .handle(&WizardState::default(), command("ACME-1"))
            .await
            .unwrap_err();

        assert_eq!(err, AssessmentError::Persistence("connection refused".to_string()));
    }
}
