//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - LLM providers (Anthropic, Gemini, mock)
//! - `catalog` - Question catalog sources
//! - `http` - axum REST surface
//! - `narrative` - Narrative generators built on an AI provider
//! - `storage` - Key-value stores and the session repository

pub mod ai;
pub mod catalog;
pub mod http;
pub mod narrative;
pub mod storage;
