//! report-summary - Summarize CSV reports with a hosted LLM
//!
//! Reads a report, renders a bounded prompt from its rows and asks a
//! chat-completion API for a short prose summary.

pub mod cli;
pub mod config;
pub mod llm;
pub mod report;

use thiserror::Error;

/// Main error type for report-summary
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("OpenAI API key must be provided via --api-key or OPENAI_API_KEY environment variable")]
    MissingApiKey,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed CSV record {record}: found {found} fields, header has {expected}")]
    MalformedRow {
        record: usize,
        found: usize,
        expected: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "report-summary";
