//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors, state machine)
//! - `assessment` - Survey model, session aggregate and scoring engine
//! - `wizard` - Wizard steps, resume position and progress

pub mod assessment;
pub mod foundation;
pub mod wizard;
