// Screening agent: candidate analysis, follow-up question generation,
// and answer evaluation. All LLM calls go through llm_client.

pub mod analyzer;
pub mod answers;
pub mod handlers;
pub mod prompts;
pub mod questions;
