//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    complete_assessment, generate_narrative, health, list_roles, resolve_code, select_role,
    submit_answer, submit_user_info, AssessmentHandlers,
};

/// Creates the assessment router.
///
/// # Routes
///
/// - `POST /api/assessments/resolve` - Enter or resume by access code
/// - `POST /api/assessments/:code/user-info` - Save the profile
/// - `POST /api/assessments/:code/role` - Select a role
/// - `PUT /api/assessments/:code/answers` - Answer a question
/// - `POST /api/assessments/:code/complete` - Finish and score
/// - `POST /api/assessments/:code/narrative` - AI recommendations
/// - `GET /api/roles` - Roles with localized labels
/// - `GET /health` - Liveness probe
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/api/assessments/resolve", post(resolve_code))
        .route("/api/assessments/:code/user-info", post(submit_user_info))
        .route("/api/assessments/:code/role", post(select_role))
        .route("/api/assessments/:code/answers", put(submit_answer))
        .route("/api/assessments/:code/complete", post(complete_assessment))
        .route("/api/assessments/:code/narrative", post(generate_narrative))
        .route("/api/roles", get(list_roles))
        .route("/health", get(health))
        .with_state(handlers)
}
