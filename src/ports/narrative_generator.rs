//! Narrative generator port - AI recommendations for a scored assessment.

use async_trait::async_trait;

use crate::domain::assessment::{AssessmentResult, Language, Role, UserInfo};
use crate::domain::foundation::AccessCode;

use super::AIError;

/// Everything the generator needs to write recommendations.
#[derive(Debug, Clone)]
pub struct NarrativeRequest {
    pub access_code: AccessCode,
    pub result: AssessmentResult,
    pub user_info: UserInfo,
    pub role: Role,
    pub language: Language,
}

/// Errors from narrative generation.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    /// No provider credentials are configured.
    #[error("narrative generation is not configured")]
    NotConfigured,

    #[error("narrative provider failed: {0}")]
    Provider(#[from] AIError),
}

/// Port for turning a scored assessment into markdown recommendations.
///
/// May be slow and may fail. An empty string is a valid, successful result.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, request: NarrativeRequest) -> Result<String, NarrativeError>;
}
