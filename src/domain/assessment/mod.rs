//! Assessment domain module.
//!
//! Holds the survey model (questions, roles, capability domains), the
//! `Session` aggregate that records a respondent's answers, and the pure
//! scoring engine that turns answers into a maturity report.

mod answer;
mod capability_domain;
mod catalog;
mod language;
mod maturity;
mod narrative;
mod question;
mod role;
mod scoring;
mod session;
mod status;
mod user_info;

pub use answer::{Answer, AnswerValue, LikertScore};
pub use capability_domain::CapabilityDomain;
pub use catalog::Catalog;
pub use language::{Language, TextDirection};
pub use maturity::MaturityLevel;
pub use narrative::NarrativeOutcome;
pub use question::{LocalizedText, Question};
pub use role::Role;
pub use scoring::{round2, AssessmentResult, DomainScore, ScoringEngine, MAX_SCORE};
pub use session::Session;
pub use status::AssessmentStatus;
pub use user_info::UserInfo;
