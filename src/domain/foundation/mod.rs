//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, the state machine trait, and error types
//! shared by the assessment and wizard modules.

mod access_code;
mod errors;
mod percentage;
mod state_machine;
mod timestamp;

pub use access_code::{AccessCode, MAX_ACCESS_CODE_LENGTH};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
