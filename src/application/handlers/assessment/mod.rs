//! Assessment wizard handlers.
//!
//! Each handler takes the current `WizardState`, applies one transition, and
//! returns the next state. Handlers that need a session treat a missing one
//! as a no-op; a failed save returns an error and leaves the caller's state
//! untouched.

mod complete_assessment;
mod errors;
mod generate_narrative;
mod resolve_code;
mod select_role;
mod submit_answer;
mod submit_user_info;

pub use complete_assessment::CompleteAssessmentHandler;
pub use errors::AssessmentError;
pub use generate_narrative::GenerateNarrativeHandler;
pub use resolve_code::{ResolveCodeCommand, ResolveCodeHandler};
pub use select_role::{SelectRoleCommand, SelectRoleHandler};
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler};
pub use submit_user_info::{SubmitUserInfoCommand, SubmitUserInfoHandler};
