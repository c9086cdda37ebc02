//! LLM-backed insight generation and translation.
//!
//! Wraps the OpenAI chat-completions API behind [`OpenAiClient`] and
//! builds the two prompts the product needs: a personalized daily
//! insight and an English-to-Hindi translation. Every network failure
//! is absorbed at this crate's boundary — callers get either generated
//! text or a deterministic pre-written fallback, never an error.

pub mod client;
pub mod insight;
pub mod pipeline;
pub mod translate;

pub use client::{LlmError, OpenAiClient};
pub use insight::InsightGenerator;
pub use pipeline::daily_insight;
pub use translate::translate_text;
