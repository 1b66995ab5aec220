//! Assessment session aggregate.
//!
//! The session is the unit of persistence: it is stored whole, under its
//! access code, after every mutation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Answer, AssessmentStatus, Language, Role, UserInfo};
use crate::domain::foundation::{AccessCode, DomainError, ErrorCode, StateMachine, Timestamp};

/// Assessment session aggregate.
///
/// # Invariants
///
/// - `role` is set whenever `status` is in-progress or completed
/// - `answers` never holds two entries for the same question id
/// - Completed sessions cannot be modified
///
/// Stored records are checked against the first two invariants on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SessionRecord")]
pub struct Session {
    /// Access code, also the storage key.
    code: AccessCode,

    status: AssessmentStatus,

    /// Language the session was started in.
    language: Language,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_info: Option<UserInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<Role>,

    /// Answers in order of first submission.
    #[serde(default)]
    answers: Vec<Answer>,

    created_at: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<Timestamp>,
}

/// Stored shape of a session, before its invariants are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord {
    code: AccessCode,
    status: AssessmentStatus,
    language: Language,
    #[serde(default)]
    user_info: Option<UserInfo>,
    #[serde(default)]
    role: Option<Role>,
    #[serde(default)]
    answers: Vec<Answer>,
    created_at: Timestamp,
    #[serde(default)]
    completed_at: Option<Timestamp>,
}

impl TryFrom<SessionRecord> for Session {
    type Error = DomainError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        if record.status != AssessmentStatus::New && record.role.is_none() {
            return Err(DomainError::new(
                ErrorCode::SerializationError,
                format!("{} session has no role", record.status),
            ));
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = record
            .answers
            .iter()
            .find(|a| !seen.insert(a.question_id.as_str()))
        {
            return Err(DomainError::new(
                ErrorCode::SerializationError,
                format!("Duplicate answer for question {}", duplicate.question_id),
            ));
        }

        Ok(Self {
            code: record.code,
            status: record.status,
            language: record.language,
            user_info: record.user_info,
            role: record.role,
            answers: record.answers,
            created_at: record.created_at,
            completed_at: record.completed_at,
        })
    }
}

impl Session {
    /// Creates a fresh session for a code that has no stored record yet.
    pub fn new(code: AccessCode, language: Language) -> Self {
        Self {
            code,
            status: AssessmentStatus::New,
            language,
            user_info: None,
            role: None,
            answers: Vec::new(),
            created_at: Timestamp::now(),
            completed_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn code(&self) -> &AccessCode {
        &self.code
    }

    pub fn status(&self) -> AssessmentStatus {
        self.status
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        self.user_info.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Returns the answer recorded for a question, if any.
    pub fn answer_for(&self, question_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.status == AssessmentStatus::Completed
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Attach (or replace) the respondent's profile.
    ///
    /// # Errors
    ///
    /// - `SessionCompleted` if the session is completed
    /// - `ValidationFailed` if a required field is missing
    pub fn attach_user_info(&mut self, info: UserInfo) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        info.validate()?;
        self.user_info = Some(info);
        Ok(())
    }

    /// Select the respondent's role and start the assessment.
    ///
    /// Role and in-progress status are always set together.
    ///
    /// # Errors
    ///
    /// - `SessionCompleted` if the session is completed
    pub fn select_role(&mut self, role: Role) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        if self.status == AssessmentStatus::New {
            self.status = self.transition(AssessmentStatus::InProgress)?;
        }
        self.role = Some(role);
        Ok(())
    }

    /// Record an answer, replacing any earlier answer to the same question.
    ///
    /// Returns `true` if an earlier answer was replaced.
    ///
    /// # Errors
    ///
    /// - `SessionCompleted` if the session is completed
    /// - `RoleNotSelected` if the assessment has not started
    pub fn record_answer(&mut self, answer: Answer) -> Result<bool, DomainError> {
        self.ensure_mutable()?;
        if self.status != AssessmentStatus::InProgress || self.role.is_none() {
            return Err(DomainError::new(
                ErrorCode::RoleNotSelected,
                "Select a role before answering questions",
            ));
        }

        match self
            .answers
            .iter_mut()
            .find(|existing| existing.question_id == answer.question_id)
        {
            Some(existing) => {
                *existing = answer;
                Ok(true)
            }
            None => {
                self.answers.push(answer);
                Ok(false)
            }
        }
    }

    /// Mark the assessment as completed now.
    ///
    /// # Errors
    ///
    /// - `SessionCompleted` if already completed
    /// - `InvalidStateTransition` if the assessment has not started
    pub fn complete(&mut self) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.status = self.transition(AssessmentStatus::Completed)?;
        self.completed_at = Some(Timestamp::now());
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_mutable(&self) -> Result<(), DomainError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::SessionCompleted,
                "Cannot modify a completed assessment",
            ))
        }
    }

    fn transition(&self, target: AssessmentStatus) -> Result<AssessmentStatus, DomainError> {
        self.status.transition_to(target).map_err(|err| {
            DomainError::new(ErrorCode::InvalidStateTransition, err.to_string())
        })
    }
}
