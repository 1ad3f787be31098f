//! Configuration module for report-summary
//!
//! Handles loading settings from a TOML file with environment overrides.

mod settings;

pub use settings::{LlmSettings, ReportSettings, Settings};
