use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::openai::OpenAiClient;
use crate::llm::prompts::{build_report_prompt, SYSTEM_PROMPT};
use crate::report::ReportRow;

/// Chat request payload: one system message and one user message.
pub struct SummaryRequest<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, request: SummaryRequest<'_>) -> Result<String>;
}

/// Build an LLM provider from runtime settings and a resolved API key.
pub fn build_provider(settings: &Settings, api_key: &str) -> Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::from_settings(settings, api_key)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: openai",
            other
        ),
    }
}

/// Summarize report rows with a single provider call.
pub async fn summarize_rows(
    provider: &dyn LlmProvider,
    rows: &[ReportRow],
    max_rows: usize,
) -> Result<String> {
    let prompt = build_report_prompt(rows, max_rows);
    let summary = provider
        .complete(SummaryRequest {
            system: SYSTEM_PROMPT,
            prompt: &prompt,
        })
        .await?;

    Ok(summary.trim().to_string())
}
