//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `KeyValueStore` - Opaque byte storage keyed by string
//! - `SessionRepository` - Whole-session persistence by access code
//!
//! ## Content Ports
//!
//! - `QuestionCatalog` - Role-filtered questions and the scoring catalog
//!
//! ## AI Ports
//!
//! - `AIProvider` - LLM completion
//! - `NarrativeGenerator` - Recommendations for a scored assessment

mod ai_provider;
mod key_value_store;
mod narrative_generator;
mod question_catalog;
mod session_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use key_value_store::{KeyValueStore, StorageError};
pub use narrative_generator::{NarrativeError, NarrativeGenerator, NarrativeRequest};
pub use question_catalog::QuestionCatalog;
pub use session_repository::SessionRepository;
