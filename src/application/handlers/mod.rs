//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    AssessmentError, CompleteAssessmentHandler, GenerateNarrativeHandler, ResolveCodeCommand,
    ResolveCodeHandler, SelectRoleCommand, SelectRoleHandler, SubmitAnswerCommand,
    SubmitAnswerHandler, SubmitUserInfoCommand, SubmitUserInfoHandler,
};
