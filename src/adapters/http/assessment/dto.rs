//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::AssessmentError;
use crate::domain::assessment::{
    AnswerValue, AssessmentResult, CapabilityDomain, Language, NarrativeOutcome, Question, Role,
    Session, TextDirection, UserInfo,
};
use crate::domain::wizard::{Progress, WizardState, WizardStep};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to enter or resume an assessment.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveRequest {
    pub code: String,
    /// UI language, used when the code starts a new session.
    #[serde(default)]
    pub language: Option<Language>,
}

/// Request to save the respondent's profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfoRequest {
    #[serde(flatten)]
    pub user_info: UserInfo,
    #[serde(default)]
    pub language: Option<Language>,
}

/// Request to select a role.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleRequest {
    pub role: Role,
    #[serde(default)]
    pub language: Option<Language>,
}

/// Request to answer one question.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub question_id: String,
    pub value: AnswerValue,
}

/// Query parameters selecting a display language.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageQuery {
    #[serde(default)]
    pub lang: Option<Language>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A question as shown to the respondent.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub domain: CapabilityDomain,
    pub text: String,
}

impl QuestionView {
    pub fn localized(question: &Question, language: Language) -> Self {
        Self {
            id: question.id.clone(),
            domain: question.domain,
            text: question.text_in(language).to_string(),
        }
    }
}

/// Everything a client needs to render the current wizard screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub step: WizardStep,
    pub language: Language,
    pub direction: TextDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    pub questions: Vec<QuestionView>,
    pub current_index: usize,
    pub progress: Progress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AssessmentResult>,
    /// Localized maturity label for the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maturity_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<NarrativeOutcome>,
}

impl From<&WizardState> for WizardView {
    fn from(state: &WizardState) -> Self {
        let language = state.language();
        Self {
            step: state.step(),
            language,
            direction: state.direction(),
            session: state.session().cloned(),
            questions: state
                .questions()
                .iter()
                .map(|q| QuestionView::localized(q, language))
                .collect(),
            current_index: state.current_index(),
            progress: state.progress(),
            result: state.result().cloned(),
            maturity_label: state
                .result()
                .map(|r| r.maturity_level.label(language).to_string()),
            narrative: state.narrative().cloned(),
        }
    }
}

/// A selectable role with its display label.
#[derive(Debug, Clone, Serialize)]
pub struct RoleView {
    pub id: Role,
    pub label: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&AssessmentError> for ErrorResponse {
    fn from(error: &AssessmentError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Catalog;
    use crate::domain::foundation::AccessCode;

    #[test]
    fn resolve_request_language_is_optional() {
        let req: ResolveRequest = serde_json::from_str(r#"{"code": "acme-1"}"#).unwrap();
        assert_eq!(req.code, "acme-1");
        assert!(req.language.is_none());

        let req: ResolveRequest =
            serde_json::from_str(r#"{"code": "acme-1", "language": "ar"}"#).unwrap();
        assert_eq!(req.language, Some(Language::Ar));
    }

    #[test]
    fn user_info_request_reads_flat_profile() {
        let json = r#"{
            "name": "Huda", "email": "huda@example.com", "organization": "Acme",
            "size": "1-50", "industry": "Retail", "jobTitle": "Analyst", "language": "en"
        }"#;
        let req: UserInfoRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.user_info.job_title, "Analyst");
        assert_eq!(req.user_info.country, "");
        assert_eq!(req.language, Some(Language::En));
    }

    #[test]
    fn answer_request_accepts_numbers_and_markers() {
        let req: AnswerRequest =
            serde_json::from_str(r#"{"questionId": "q3", "value": 4}"#).unwrap();
        assert_eq!(req.value, AnswerValue::numeric(4).unwrap());

        let req: AnswerRequest =
            serde_json::from_str(r#"{"questionId": "q3", "value": "NA"}"#).unwrap();
        assert_eq!(req.value, AnswerValue::NotApplicable);

        assert!(serde_json::from_str::<AnswerRequest>(r#"{"questionId": "q3", "value": 9}"#)
            .is_err());
    }

    #[test]
    fn wizard_view_localizes_questions() {
        let mut session = Session::new(AccessCode::new("VIEW-1").unwrap(), Language::Ar);
        session.select_role(Role::IT).unwrap();
        let state = WizardState::new(Language::Ar)
            .started()
            .unwrap()
            .resolved(session, Catalog::standard().questions_for_role(Role::IT), None)
            .unwrap();

        let view = WizardView::from(&state);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["step"], "assessment");
        assert_eq!(json["direction"], "rtl");
        assert_eq!(json["currentIndex"], 0);
        assert_eq!(
            json["questions"][0]["text"],
            Catalog::standard().questions()[0].text.ar.as_str()
        );
        assert!(json.get("result").is_none());
    }

    #[test]
    fn error_response_carries_code_and_message() {
        let response = ErrorResponse::from(&AssessmentError::unknown_question("q42"));
        assert_eq!(response.code, "UNKNOWN_QUESTION");
        assert_eq!(response.message, "Unknown question: q42");
    }
}
