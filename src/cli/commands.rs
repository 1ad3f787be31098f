//! CLI command implementations

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::llm::{build_provider, prompts::build_report_prompt, summarize_rows};
use crate::report::load_csv;

/// Options for a single summary run, after CLI parsing.
#[derive(Debug, Default)]
pub struct SummaryOptions<'a> {
    pub api_key: Option<&'a str>,
    pub max_rows: Option<usize>,
    pub print_prompt: bool,
}

/// Summarize a CSV report and print the result to stdout.
///
/// The credential is resolved before the report is read, so a missing key
/// fails without touching the file or the network.
pub async fn summarize_report(
    settings: &Settings,
    csv_path: &Path,
    options: SummaryOptions<'_>,
) -> Result<()> {
    let max_rows = options.max_rows.unwrap_or(settings.report.max_rows);

    if options.print_prompt {
        let rows = read_report(csv_path)?;
        println!("{}", build_report_prompt(&rows, max_rows));
        return Ok(());
    }

    let api_key = settings.resolve_api_key(options.api_key)?;
    let rows = read_report(csv_path)?;
    tracing::info!(
        "Summarizing {} rows (at most {} in prompt)",
        rows.len(),
        max_rows
    );

    let provider = build_provider(settings, &api_key)?;
    let summary = summarize_rows(provider.as_ref(), &rows, max_rows).await?;

    println!("{}", summary);

    Ok(())
}

fn read_report(csv_path: &Path) -> Result<Vec<crate::report::ReportRow>> {
    load_csv(csv_path).with_context(|| format!("Failed to load report: {}", csv_path.display()))
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            if !shown.llm.api_key.is_empty() {
                shown.llm.api_key = "<redacted>".to_string();
            }
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
