//! CompleteAssessmentHandler - Finish the assessment and score it.

use std::sync::Arc;

use tracing::{debug, error, info};

use super::AssessmentError;
use crate::domain::assessment::ScoringEngine;
use crate::domain::wizard::WizardState;
use crate::ports::{QuestionCatalog, SessionRepository};

/// Handler that marks the session completed and computes its result.
///
/// Completion is accepted only once the respondent is on the last question
/// and has answered it.
pub struct CompleteAssessmentHandler {
    repository: Arc<dyn SessionRepository>,
    catalog: Arc<dyn QuestionCatalog>,
}

impl CompleteAssessmentHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, catalog: Arc<dyn QuestionCatalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn handle(&self, state: &WizardState) -> Result<WizardState, AssessmentError> {
        let Some(current) = state.session() else {
            debug!("no session loaded, ignoring completion");
            return Ok(state.clone());
        };

        if current.is_completed() {
            return Err(AssessmentError::InvalidState(
                "Assessment is already completed".to_string(),
            ));
        }
        if !state.is_ready_to_complete() {
            return Err(AssessmentError::InvalidState(
                "Answer the last question before completing".to_string(),
            ));
        }

        let mut session = current.clone();
        session.complete()?;
        let result = ScoringEngine::score(self.catalog.catalog(), session.answers());
        let next = state.completed(session.clone(), result.clone())?;

        if let Err(err) = self.repository.save(&session).await {
            error!(code = %session.code(), error = %err, "failed to save completion");
            return Err(err.into());
        }

        info!(
            code = %session.code(),
            overall_score = result.overall_score,
            maturity_level = %result.maturity_level,
            "assessment completed"
        );

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::StaticQuestionCatalog;
    use crate::adapters::storage::{InMemoryKeyValueStore, KeyValueSessionRepository};
    use crate::domain::assessment::{
        Answer, AnswerValue, CapabilityDomain, Catalog, Language, MaturityLevel, Role, Session,
    };
    use crate::domain::foundation::{AccessCode, DomainError, ErrorCode};
    use crate::domain::wizard::WizardStep;
    use async_trait::async_trait;

    struct FailingRepository;

    #[async_trait]
    impl SessionRepository for FailingRepository {
        async fn find(&self, _code: &AccessCode) -> Result<Option<Session>, DomainError> {
            Ok(None)
        }

        async fn save(&self, _session: &Session) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "Simulated save failure"))
        }
    }

    fn code() -> AccessCode {
        AccessCode::new("DONE-1").unwrap()
    }

    /// Compliance assessment positioned on its resume question.
    fn assessment_state(answers: Vec<Answer>) -> WizardState {
        let mut session = Session::new(code(), Language::En);
        session.select_role(Role::Compliance).unwrap();
        for answer in answers {
            session.record_answer(answer).unwrap();
        }
        WizardState::new(Language::En)
            .started()
            .unwrap()
            .resolved(
                session,
                Catalog::standard().questions_for_role(Role::Compliance),
                None,
            )
            .unwrap()
    }

    fn answered_state() -> WizardState {
        assessment_state(vec![
            Answer::numeric("q1", 4).unwrap(),
            Answer::numeric("q4", 2).unwrap(),
            Answer::new("q7", AnswerValue::NotApplicable),
            Answer::new("q8", AnswerValue::NotSure),
        ])
    }

    fn in_memory() -> Arc<KeyValueSessionRepository> {
        Arc::new(KeyValueSessionRepository::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )))
    }

    fn handler(repository: Arc<dyn SessionRepository>) -> CompleteAssessmentHandler {
        CompleteAssessmentHandler::new(repository, Arc::new(StaticQuestionCatalog::standard()))
    }

    #[tokio::test]
    async fn completion_persists_and_scores() {
        let repository = Arc::new(KeyValueSessionRepository::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )));

        let next = handler(repository.clone())
            .handle(&answered_state())
            .await
            .unwrap();

        assert_eq!(next.step(), WizardStep::Results);
        let result = next.result().unwrap();
        assert_eq!(result.domain_score(CapabilityDomain::Governance).unwrap().score, 4.0);
        assert_eq!(result.domain_score(CapabilityDomain::Security).unwrap().score, 2.0);
        assert_eq!(result.domain_score(CapabilityDomain::Culture).unwrap().score, 0.0);
        assert_eq!(result.overall_score, 3.0);
        assert_eq!(result.maturity_level, MaturityLevel::Defined);

        let stored = repository.find(&code()).await.unwrap().unwrap();
        assert!(stored.is_completed());
        assert!(stored.completed_at().is_some());
    }

    #[tokio::test]
    async fn completion_on_first_question_is_rejected() {
        let repository = in_memory();
        let state = assessment_state(Vec::new());
        assert_eq!(state.current_index(), 0);

        let err = handler(repository.clone()).handle(&state).await.unwrap_err();

        assert!(matches!(err, AssessmentError::InvalidState(_)));
        assert!(repository.find(&code()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn completion_needs_the_resume_point_on_the_last_question() {
        let repository = in_memory();
        let state = assessment_state(vec![Answer::numeric("q8", 5).unwrap()]);
        assert_eq!(state.current_question().unwrap().id, "q1");

        let err = handler(repository.clone()).handle(&state).await.unwrap_err();

        assert!(matches!(err, AssessmentError::InvalidState(_)));
        assert!(repository.find(&code()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn completing_twice_is_invalid_state() {
        let repository = Arc::new(KeyValueSessionRepository::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )));
        let handler = handler(repository);
        let done = handler.handle(&answered_state()).await.unwrap();

        let err = handler.handle(&done).await.unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidState(_)));
    }

    #[tokio::test]
    async fn without_session_is_a_no_op() {
        let state = WizardState::new(Language::Ar);
        let next = handler(Arc::new(FailingRepository)).handle(&state).await.unwrap();
        assert_eq!(next, state);
    }

    #[tokio::test]
    async fn save_failure_leaves_state_in_assessment() {
        let state = answered_state();
        let err = handler(Arc::new(FailingRepository))
            .handle(&state)
            .await
            .unwrap_err();

        assert!(matches!(err, AssessmentError::Persistence(_)));
        assert_eq!(state.step(), WizardStep::Assessment);
        assert!(state.result().is_none());
    }
}
