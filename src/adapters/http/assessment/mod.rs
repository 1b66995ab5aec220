//! HTTP adapter for assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnswerRequest, ErrorResponse, LanguageQuery, QuestionView, ResolveRequest, RoleRequest,
    RoleView, UserInfoRequest, WizardView,
};
pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
