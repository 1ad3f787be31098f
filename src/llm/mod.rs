//! LLM module for report-summary
//!
//! Builds report prompts and sends them to a chat-completion provider.

mod client;
mod openai;
pub mod prompts;

pub use client::{build_provider, summarize_rows, LlmProvider, SummaryRequest};
pub use openai::OpenAiClient;
