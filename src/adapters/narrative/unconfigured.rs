//! Narrative generator used when no AI provider is configured.

use async_trait::async_trait;

use crate::ports::{NarrativeError, NarrativeGenerator, NarrativeRequest};

/// Always reports `NotConfigured`, which the application shows as the
/// "recommendations unavailable" placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredNarrativeGenerator;

#[async_trait]
impl NarrativeGenerator for UnconfiguredNarrativeGenerator {
    async fn generate(&self, _request: NarrativeRequest) -> Result<String, NarrativeError> {
        Err(NarrativeError::NotConfigured)
    }
}
