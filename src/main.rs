//! report-summary - Summarize CSV reports with a hosted LLM
//!
//! Entry point for the report-summary CLI application.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use report_summary::cli::commands::SummaryOptions;
use report_summary::cli::{Cli, Commands};
use report_summary::config::Settings;
use report_summary::ReportError;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        report_summary::cli::completions::print(shell);
        return Ok(());
    }

    // Load configuration only for runtime commands.
    let settings = Settings::load()?;

    // Initialize logging
    let default_level = if cli.verbose {
        "debug"
    } else {
        settings.general.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Config(config_cmd)) => {
            report_summary::cli::commands::config_command(&settings, config_cmd)?;
        }
        Some(Commands::Completions { .. }) => unreachable!(),
        None => {
            // clap enforces the path when no subcommand is given
            let Some(csv_path) = cli.csv_path.as_deref() else {
                Cli::command()
                    .error(ErrorKind::MissingRequiredArgument, "missing <CSV_PATH>")
                    .exit();
            };

            let options = SummaryOptions {
                api_key: cli.api_key.as_deref(),
                max_rows: cli.max_rows,
                print_prompt: cli.print_prompt,
            };

            let result =
                report_summary::cli::commands::summarize_report(&settings, csv_path, options)
                    .await;

            if let Err(err) = result {
                if let Some(ReportError::MissingApiKey) = err.downcast_ref::<ReportError>() {
                    Cli::command()
                        .error(ErrorKind::MissingRequiredArgument, err.to_string())
                        .exit();
                }
                return Err(err);
            }
        }
    }

    Ok(())
}
