//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    AssessmentError, CompleteAssessmentHandler, GenerateNarrativeHandler, ResolveCodeCommand,
    ResolveCodeHandler, SelectRoleCommand, SelectRoleHandler, SubmitAnswerCommand,
    SubmitAnswerHandler, SubmitUserInfoCommand, SubmitUserInfoHandler,
};
