//! AI-powered NarrativeGenerator implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::assessment::{AssessmentResult, Language, Role, UserInfo};
use crate::ports::{
    AIProvider, CompletionRequest, MessageRole, NarrativeError, NarrativeGenerator,
    NarrativeRequest, RequestMetadata,
};

const SYSTEM_PROMPT: &str = "You are an expert Data Maturity Consultant.";

/// Narrative generator that asks an LLM for an executive summary and
/// prioritized recommendations.
pub struct LlmNarrativeGenerator {
    ai_provider: Arc<dyn AIProvider>,
    max_tokens: u32,
}

impl LlmNarrativeGenerator {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self {
            ai_provider,
            max_tokens: 2048,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Create the analysis prompt for a scored assessment
    fn create_prompt(
        result: &AssessmentResult,
        user_info: &UserInfo,
        role: Role,
        language: Language,
    ) -> String {
        let domain_summary = result
            .domain_scores
            .iter()
            .map(|d| format!("{}: {}/{}", d.domain, d.score, d.max_score))
            .collect::<Vec<_>>()
            .join(", ");

        let next_step = match result.maturity_level.next() {
            Some(next) => format!(
                "Focus on moving from their current level ({}) to the next level ({}).",
                result.maturity_level, next
            ),
            None => format!(
                "They are already at the highest level ({}); focus on sustaining it.",
                result.maturity_level
            ),
        };

        format!(
            r#"Analyze the following assessment results for a client:
- Organization: {} ({}, {})
- Role of Assessor: {}
- Overall Score: {} ({})
- Domain Scores: {}

Please provide a structured executive summary and 3 specific, actionable recommendations prioritized by impact.
{}

Output Language: {}
Format: Markdown (headers, bullet points).
Tone: Professional, encouraging, and strategic."#,
            user_info.organization,
            user_info.industry,
            user_info.size,
            role,
            result.overall_score,
            result.maturity_level,
            domain_summary,
            next_step,
            language.english_name(),
        )
    }
}

#[async_trait]
impl NarrativeGenerator for LlmNarrativeGenerator {
    #[tracing::instrument(skip(self, request), fields(code = %request.access_code, role = %request.role))]
    async fn generate(&self, request: NarrativeRequest) -> Result<String, NarrativeError> {
        let prompt = Self::create_prompt(
            &request.result,
            &request.user_info,
            request.role,
            request.language,
        );

        let completion = CompletionRequest::new(RequestMetadata::for_session(request.access_code))
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, prompt)
            .with_max_tokens(self.max_tokens)
            .with_temperature(0.7);

        let response = self.ai_provider.complete(completion).await?;
        tracing::debug!(
            model = %response.model,
            tokens = response.usage.total_tokens,
            "narrative generated"
        );
        Ok(response.content)
    }
}
