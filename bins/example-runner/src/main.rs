mod config;
mod engine;
mod evaluator;


use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{HarnessConfig, ReportFormat};
use example_suite::suite;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "example-runner")]
#[command(about = "Run the example assertion suite and report pass/fail/skip outcomes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the suite
    Run {
        /// Also run cases that carry a skip directive
        #[arg(long)]
        include_ignored: bool,

        /// Only run cases whose name contains this substring
        #[arg(short, long)]
        filter: Option<String>,

        /// Run cases one after another instead of concurrently
        #[arg(long)]
        sequential: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Harness config file (defaults to config/harness.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List discovered cases
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            include_ignored,
            filter,
            sequential,
            json,
            config,
        } => {
            let mut harness = HarnessConfig::load_or_default(config.as_deref()).map_err(|e| {
                error!("Failed to load harness configuration: {:#}", e);
                e
            })?;

            harness.apply_overrides(include_ignored, filter, sequential, json);

            let success = run(&harness).await?;
            if !success {
                std::process::exit(1);
            }
        }
        Commands::List => {
            for case in suite::cases() {
                match case.skip {
                    Some(directive) => println!(
                        "{} (skipped: {})",
                        case.name,
                        directive.reason.unwrap_or("no reason given")
                    ),
                    None => println!("{}", case.name),
                }
            }
        }
    }

    Ok(())
}

async fn run(harness: &HarnessConfig) -> Result<bool> {
    info!(?harness, "Example runner starting");

    let suite_run = engine::execute_suite(&suite::cases(), harness).await;
    let report = evaluator::aggregate_results(&suite_run);

    match harness.format {
        ReportFormat::Text => println!("{}", evaluator::render_text(&report)),
        ReportFormat::Json => {
            let json = report
                .to_json_pretty()
                .context("Failed to serialize suite report")?;
            println!("{}", json);
        }
    }

    Ok(report.is_success())
}
