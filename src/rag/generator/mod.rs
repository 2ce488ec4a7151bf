//! Generation service client
//!
//! HTTP client for the external generative-language service that turns a
//! RAG context into an advisory summary. The ranking engine never
//! depends on this call succeeding.

pub mod config;
pub mod gemini;

pub use config::GeneratorConfig;
pub use gemini::GeminiGenerator;
