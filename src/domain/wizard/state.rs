//! Wizard state: everything the respondent's screen is derived from.
//!
//! Transitions never mutate in place. Each one takes `&self` and returns a
//! new state, so a caller whose persistence step fails can simply keep the
//! state it already had.

use crate::domain::assessment::{
    AssessmentResult, Language, NarrativeOutcome, Question, Session, TextDirection,
};
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};

use super::{resume_index, Progress, WizardStep};

/// Snapshot of the respondent's position in the wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    step: WizardStep,
    language: Language,
    session: Option<Session>,
    questions: Vec<Question>,
    current_index: usize,
    result: Option<AssessmentResult>,
    narrative: Option<NarrativeOutcome>,
}

impl WizardState {
    /// Initial state: the landing screen in the given UI language.
    pub fn new(language: Language) -> Self {
        Self {
            step: WizardStep::Landing,
            language,
            session: None,
            questions: Vec::new(),
            current_index: 0,
            result: None,
            narrative: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> TextDirection {
        self.language.direction()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Role-filtered questions for the current session.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    pub fn narrative(&self) -> Option<&NarrativeOutcome> {
        self.narrative.as_ref()
    }

    /// Position of `question_id` in the question list.
    pub fn position_of(&self, question_id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == question_id)
    }

    pub fn progress(&self) -> Progress {
        let answered = match &self.session {
            Some(session) => self
                .questions
                .iter()
                .filter(|q| session.answer_for(&q.id).is_some())
                .count(),
            None => 0,
        };
        Progress::new(self.current_index, answered, self.questions.len())
    }

    /// Returns true when the respondent is on the last question and has
    /// answered it, the only point from which the assessment can finish.
    pub fn is_ready_to_complete(&self) -> bool {
        let Some(session) = &self.session else {
            return false;
        };
        self.progress().is_on_last_question()
            && self
                .current_question()
                .is_some_and(|q| session.answer_for(&q.id).is_some())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    //
    // Every step change is checked against the `WizardStep` transition table.
    // ─────────────────────────────────────────────────────────────────────────

    /// Landing (or results) → code entry.
    pub fn started(&self) -> Result<Self, DomainError> {
        Ok(Self {
            step: self.advance(WizardStep::CodeEntry)?,
            ..self.clone()
        })
    }

    /// Enters a freshly resolved session.
    ///
    /// The session's stored language overrides the current UI language.
    pub fn resolved(
        &self,
        session: Session,
        questions: Vec<Question>,
        result: Option<AssessmentResult>,
    ) -> Result<Self, DomainError> {
        let step = self.advance(WizardStep::for_session(&session))?;
        let current_index = resume_index(&questions, session.answers()).unwrap_or(0);
        Ok(Self {
            step,
            language: session.language(),
            session: Some(session),
            questions,
            current_index,
            result,
            narrative: None,
        })
    }

    /// Profile saved → role selection.
    pub fn user_info_saved(&self, session: Session) -> Result<Self, DomainError> {
        Ok(Self {
            step: self.advance(WizardStep::RoleSelection)?,
            session: Some(session),
            ..self.clone()
        })
    }

    /// Role saved → assessment at the resume position.
    pub fn role_selected(
        &self,
        session: Session,
        questions: Vec<Question>,
    ) -> Result<Self, DomainError> {
        let step = self.advance(WizardStep::Assessment)?;
        let current_index = resume_index(&questions, session.answers()).unwrap_or(0);
        Ok(Self {
            step,
            session: Some(session),
            questions,
            current_index,
            ..self.clone()
        })
    }

    /// Answer saved → stay on the assessment, moving past the answered question.
    pub fn answer_recorded(&self, session: Session, question_id: &str) -> Result<Self, DomainError> {
        let step = self.advance(WizardStep::Assessment)?;
        let last = self.questions.len().saturating_sub(1);
        let current_index = self
            .position_of(question_id)
            .map(|pos| (pos + 1).min(last))
            .unwrap_or(self.current_index);
        Ok(Self {
            step,
            session: Some(session),
            current_index,
            ..self.clone()
        })
    }

    /// Assessment completed → results.
    pub fn completed(
        &self,
        session: Session,
        result: AssessmentResult,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            step: self.advance(WizardStep::Results)?,
            session: Some(session),
            result: Some(result),
            narrative: None,
            ..self.clone()
        })
    }

    /// Attaches the narrative shown next to the results.
    pub fn with_narrative(&self, narrative: NarrativeOutcome) -> Self {
        Self {
            narrative: Some(narrative),
            ..self.clone()
        }
    }

    /// Steps back one question, staying on the first.
    pub fn previous_question(&self) -> Self {
        Self {
            current_index: self.current_index.saturating_sub(1),
            ..self.clone()
        }
    }

    fn advance(&self, target: WizardStep) -> Result<WizardStep, DomainError> {
        self.step.transition_to(target).map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot move from {} to {}", self.step, target),
            )
        })
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
