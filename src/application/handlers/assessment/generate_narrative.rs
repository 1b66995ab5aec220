//! GenerateNarrativeHandler - AI recommendations for the results screen.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::assessment::NarrativeOutcome;
use crate::domain::wizard::WizardState;
use crate::ports::{NarrativeError, NarrativeGenerator, NarrativeRequest};

/// Handler that attaches a narrative to a scored assessment.
///
/// Never fails: generator errors become a localized placeholder and the
/// score report stays as it was.
pub struct GenerateNarrativeHandler {
    generator: Arc<dyn NarrativeGenerator>,
}

impl GenerateNarrativeHandler {
    pub fn new(generator: Arc<dyn NarrativeGenerator>) -> Self {
        Self { generator }
    }

    #[tracing::instrument(skip_all)]
    pub async fn handle(&self, state: &WizardState) -> WizardState {
        let Some(request) = Self::request_for(state) else {
            debug!("result, profile or role missing, skipping narrative");
            return state.clone();
        };

        let language = state.language();
        let outcome = match self.generator.generate(request).await {
            Ok(text) => NarrativeOutcome::from_text(text, language),
            Err(NarrativeError::NotConfigured) => NarrativeOutcome::unavailable(language),
            Err(err) => {
                warn!(error = %err, "narrative generation failed");
                NarrativeOutcome::failed(language)
            }
        };

        state.with_narrative(outcome)
    }

    fn request_for(state: &WizardState) -> Option<NarrativeRequest> {
        let session = state.session()?;
        Some(NarrativeRequest {
            access_code: session.code().clone(),
            result: state.result()?.clone(),
            user_info: session.user_info()?.clone(),
            role: session.role()?,
            language: state.language(),
        })
    }
}
