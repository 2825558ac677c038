//! Single-file AI review flow for Vigil.
//!
//! Provides the review pipeline: filename validation, filesystem wrappers,
//! prompt construction, the OpenAI-compatible LLM client, and the
//! orchestration that ties them together.

pub mod fs;
pub mod llm;
pub mod pipeline;
pub mod prompt;
pub mod validate;
