//! Narrative generator adapters.
//!
//! - **LlmNarrativeGenerator** - Builds a consultant prompt and calls an `AIProvider`
//! - **UnconfiguredNarrativeGenerator** - Stand-in when no provider key is set

mod llm_narrative_generator;
mod unconfigured;

pub use llm_narrative_generator::LlmNarrativeGenerator;
pub use unconfigured::UnconfiguredNarrativeGenerator;
