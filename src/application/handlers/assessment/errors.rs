//! Assessment workflow error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors surfaced by the assessment handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// The typed access code is malformed.
    #[error("Invalid access code: {0}")]
    InvalidAccessCode(String),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// The session is not in a state that allows the action.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// An answer arrived before a role was chosen.
    #[error("Role not selected: {0}")]
    RoleNotSelected(String),

    /// The answer references a question outside the session's question list.
    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    /// Loading or saving the session failed.
    #[error("Could not save your progress: {0}")]
    Persistence(String),

    #[error("Question catalog unavailable: {0}")]
    Catalog(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AssessmentError {
    pub fn invalid_access_code(message: impl Into<String>) -> Self {
        AssessmentError::InvalidAccessCode(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AssessmentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn unknown_question(question_id: impl Into<String>) -> Self {
        AssessmentError::UnknownQuestion(question_id.into())
    }

    pub fn catalog(err: DomainError) -> Self {
        AssessmentError::Catalog(err.message)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::InvalidAccessCode(_) => ErrorCode::InvalidAccessCode,
            AssessmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AssessmentError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            AssessmentError::RoleNotSelected(_) => ErrorCode::RoleNotSelected,
            AssessmentError::UnknownQuestion(_) => ErrorCode::UnknownQuestion,
            AssessmentError::Persistence(_) => ErrorCode::StorageError,
            AssessmentError::Catalog(_) | AssessmentError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// True when the respondent can simply try the same action again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AssessmentError::InvalidAccessCode(_) | AssessmentError::Persistence(_)
        )
    }
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => AssessmentError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::InvalidAccessCode => AssessmentError::InvalidAccessCode(err.message),
            ErrorCode::UnknownQuestion => AssessmentError::UnknownQuestion(err.message),
            ErrorCode::RoleNotSelected => AssessmentError::RoleNotSelected(err.message),
            ErrorCode::SessionCompleted
            | ErrorCode::InvalidStateTransition
            | ErrorCode::SessionNotFound => AssessmentError::InvalidState(err.message),
            ErrorCode::StorageError | ErrorCode::SerializationError => {
                AssessmentError::Persistence(err.message)
            }
            ErrorCode::AIProviderError | ErrorCode::InternalError => {
                AssessmentError::Internal(err.message)
            }
        }
    }
}
