//! Maturity Assessment - Data Maturity Survey Wizard
//!
//! This crate implements a multi-step assessment: a respondent enters an
//! access code, describes their organization, picks a role, answers
//! role-filtered Likert questions, and receives per-domain and overall
//! maturity scores with optional AI-written recommendations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
