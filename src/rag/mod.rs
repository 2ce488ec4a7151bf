//! RAG context and generation
//!
//! Serializes (query, records) into a grounding context block and sends
//! it, behind the fixed advisor prompt, to an external generation
//! service.

pub mod context;
pub mod generator;
pub mod prompt;

// Re-exports
pub use context::build_context;
pub use generator::{GeminiGenerator, GeneratorConfig};
pub use prompt::ADVISOR_SYSTEM_PROMPT;
