//! HTTP handlers for assessment endpoints.
//!
//! Requests carry no server-side wizard state. Each one resolves the access
//! code to rebuild the wizard state, then applies a single transition.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    AssessmentError, CompleteAssessmentHandler, GenerateNarrativeHandler, ResolveCodeCommand,
    ResolveCodeHandler, SelectRoleCommand, SelectRoleHandler, SubmitAnswerCommand,
    SubmitAnswerHandler, SubmitUserInfoCommand, SubmitUserInfoHandler,
};
use crate::domain::assessment::{Language, Role};
use crate::domain::wizard::{WizardState, WizardStep};

use super::dto::{
    AnswerRequest, ErrorResponse, LanguageQuery, ResolveRequest, RoleRequest, RoleView,
    UserInfoRequest, WizardView,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    resolve_handler: Arc<ResolveCodeHandler>,
    user_info_handler: Arc<SubmitUserInfoHandler>,
    role_handler: Arc<SelectRoleHandler>,
    answer_handler: Arc<SubmitAnswerHandler>,
    complete_handler: Arc<CompleteAssessmentHandler>,
    narrative_handler: Arc<GenerateNarrativeHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        resolve_handler: Arc<ResolveCodeHandler>,
        user_info_handler: Arc<SubmitUserInfoHandler>,
        role_handler: Arc<SelectRoleHandler>,
        answer_handler: Arc<SubmitAnswerHandler>,
        complete_handler: Arc<CompleteAssessmentHandler>,
        narrative_handler: Arc<GenerateNarrativeHandler>,
    ) -> Self {
        Self {
            resolve_handler,
            user_info_handler,
            role_handler,
            answer_handler,
            complete_handler,
            narrative_handler,
        }
    }

    /// Rebuilds the wizard state for `code`.
    async fn load(
        &self,
        code: String,
        language: Option<Language>,
    ) -> Result<WizardState, AssessmentError> {
        let state = WizardState::new(language.unwrap_or_default()).started()?;
        self.resolve_handler
            .handle(&state, ResolveCodeCommand { code })
            .await
    }

    /// Rebuilds the wizard state for `code` on the role screen.
    ///
    /// A new session whose profile is already stored resolves to the profile
    /// step; replaying the saved profile puts it back on role selection.
    async fn load_for_role(
        &self,
        code: String,
        language: Option<Language>,
    ) -> Result<WizardState, AssessmentError> {
        let state = self.load(code, language).await?;
        match state.session() {
            Some(session)
                if state.step() == WizardStep::UserInfo && session.user_info().is_some() =>
            {
                Ok(state.user_info_saved(session.clone())?)
            }
            _ => Ok(state),
        }
    }
}

fn view(state: &WizardState) -> Response {
    (StatusCode::OK, Json(WizardView::from(state))).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments/resolve - Enter or resume an assessment
pub async fn resolve_code(
    State(handlers): State<AssessmentHandlers>,
    Json(req): Json<ResolveRequest>,
) -> Response {
    match handlers.load(req.code, req.language).await {
        Ok(state) => view(&state),
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/assessments/:code/user-info - Save the respondent's profile
pub async fn submit_user_info(
    State(handlers): State<AssessmentHandlers>,
    Path(code): Path<String>,
    Json(req): Json<UserInfoRequest>,
) -> Response {
    let state = match handlers.load(code, req.language).await {
        Ok(state) => state,
        Err(e) => return handle_assessment_error(e),
    };

    let cmd = SubmitUserInfoCommand {
        user_info: req.user_info,
    };

    match handlers.user_info_handler.handle(&state, cmd).await {
        Ok(next) => view(&next),
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/assessments/:code/role - Select a role and start answering
pub async fn select_role(
    State(handlers): State<AssessmentHandlers>,
    Path(code): Path<String>,
    Json(req): Json<RoleRequest>,
) -> Response {
    let state = match handlers.load_for_role(code, req.language).await {
        Ok(state) => state,
        Err(e) => return handle_assessment_error(e),
    };

    let cmd = SelectRoleCommand { role: req.role };

    match handlers.role_handler.handle(&state, cmd).await {
        Ok(next) => view(&next),
        Err(e) => handle_assessment_error(e),
    }
}

/// PUT /api/assessments/:code/answers - Answer one question
pub async fn submit_answer(
    State(handlers): State<AssessmentHandlers>,
    Path(code): Path<String>,
    Json(req): Json<AnswerRequest>,
) -> Response {
    let state = match handlers.load(code, None).await {
        Ok(state) => state,
        Err(e) => return handle_assessment_error(e),
    };

    let cmd = SubmitAnswerCommand {
        question_id: req.question_id,
        value: req.value,
    };

    match handlers.answer_handler.handle(&state, cmd).await {
        Ok(next) => view(&next),
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/assessments/:code/complete - Finish and score the assessment
pub async fn complete_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(code): Path<String>,
) -> Response {
    let state = match handlers.load(code, None).await {
        Ok(state) => state,
        Err(e) => return handle_assessment_error(e),
    };

    match handlers.complete_handler.handle(&state).await {
        Ok(next) => view(&next),
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/assessments/:code/narrative - AI recommendations for the results
pub async fn generate_narrative(
    State(handlers): State<AssessmentHandlers>,
    Path(code): Path<String>,
) -> Response {
    let state = match handlers.load(code, None).await {
        Ok(state) => state,
        Err(e) => return handle_assessment_error(e),
    };

    let next = handlers.narrative_handler.handle(&state).await;
    match next.narrative() {
        Some(outcome) => (StatusCode::OK, Json(outcome.clone())).into_response(),
        None => handle_assessment_error(AssessmentError::InvalidState(
            "Recommendations need a completed assessment with a profile and role".to_string(),
        )),
    }
}

/// GET /api/roles - Roles with display labels
pub async fn list_roles(Query(query): Query<LanguageQuery>) -> Json<Vec<RoleView>> {
    let language = query.lang.unwrap_or_default();
    Json(
        Role::ALL
            .into_iter()
            .map(|role| RoleView {
                id: role,
                label: role.label(language).to_string(),
            })
            .collect(),
    )
}

/// GET /health - Liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn status_for(error: &AssessmentError) -> StatusCode {
    match error {
        AssessmentError::InvalidAccessCode(_) | AssessmentError::ValidationFailed { .. } => {
            StatusCode::BAD_REQUEST
        }
        AssessmentError::UnknownQuestion(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentError::InvalidState(_) | AssessmentError::RoleNotSelected(_) => {
            StatusCode::CONFLICT
        }
        AssessmentError::Persistence(_) => StatusCode::SERVICE_UNAVAILABLE,
        AssessmentError::Catalog(_) | AssessmentError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn handle_assessment_error(error: AssessmentError) -> Response {
    (status_for(&error), Json(ErrorResponse::from(&error))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_code_maps_to_400() {
        let response = handle_assessment_error(AssessmentError::invalid_access_code("empty"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_maps_to_400() {
        let response = handle_assessment_error(AssessmentError::validation("email", "missing @"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_question_maps_to_422() {
        let response = handle_assessment_error(AssessmentError::unknown_question("q77"));
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn invalid_state_maps_to_409() {
        let response =
            handle_assessment_error(AssessmentError::InvalidState("completed".to_string()));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn missing_role_maps_to_409() {
        let response =
            handle_assessment_error(AssessmentError::RoleNotSelected("pick one".to_string()));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn persistence_maps_to_503() {
        let response =
            handle_assessment_error(AssessmentError::Persistence("timeout".to_string()));
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn catalog_and_internal_map_to_500() {
        for error in [
            AssessmentError::Catalog("gone".to_string()),
            AssessmentError::Internal("boom".to_string()),
        ] {
            assert_eq!(
                handle_assessment_error(error).status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }
}
