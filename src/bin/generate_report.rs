//! Generate a report from an answers JSON file.
//!
//! Usage: generate_report <answers.json> [--config <config.json>]
//!
//! Without `--config`, configuration comes from `REPORT_*` environment
//! variables. Prints the submission receipt as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cellar_report::{submit, Answers, JsonlLeadStore, OutboxMailer, ReportConfig, ReportGenerator};

#[derive(Debug, Parser)]
#[command(name = "generate_report", about = "Generate a wine report from a questionnaire answers file")]
struct Args {
    /// Answers JSON object (one submitted questionnaire).
    answers: PathBuf,
    /// Configuration JSON file; `REPORT_*` environment variables otherwise.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cellar_report=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::from_env()?,
    };

    tracing::info!("Configuration:");
    tracing::info!("  asset_dir: {:?}", config.asset_dir);
    tracing::info!("  output_dir: {:?}", config.output_dir);
    tracing::info!("  base_locale: {}", config.base_locale);

    let raw = std::fs::read_to_string(&args.answers)
        .with_context(|| format!("Failed to read answers file: {:?}", args.answers))?;
    let answers: Answers = serde_json::from_str(&raw)
        .with_context(|| format!("Answers must be a JSON object: {:?}", args.answers))?;

    let store = JsonlLeadStore::new(&config.lead_store_path);
    let mailer = OutboxMailer::from_config(&config);
    let generator = ReportGenerator::new(config);

    let receipt = submit(&answers, &generator, &store, &mailer).context("Report generation failed")?;
    println!("{}", serde_json::to_string_pretty(&receipt)?);
    Ok(())
}
