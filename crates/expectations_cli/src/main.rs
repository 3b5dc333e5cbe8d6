mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dqe")]
#[command(version, about = "Data Quality Expectations CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a CSV file against an expectation suite
    Validate {
        /// Path to the suite file (JSON or YAML)
        suite: String,

        /// Path to the CSV data file
        #[arg(short, long)]
        data: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Store the run result under this directory
        #[arg(short, long)]
        results_dir: Option<String>,

        /// Checkpoint name for the stored result (defaults to the suite name)
        #[arg(short, long)]
        checkpoint: Option<String>,

        /// Cap on sampled violating values per expectation
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Check a suite definition without touching data
    Check {
        /// Path to the suite file (JSON or YAML)
        suite: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Generate an expectation suite from a CSV file
    Profile {
        /// Path to the CSV data file
        data: String,

        /// Suite name (defaults to the file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Render stored validation results as a static HTML site
    Docs {
        /// Directory holding stored results
        #[arg(short, long)]
        results_dir: String,

        /// Output directory for the site (defaults to <results-dir>/site)
        #[arg(short, long)]
        site_dir: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match cli.command {
        Commands::Validate {
            suite,
            data,
            format,
            results_dir,
            checkpoint,
            limit,
        } => {
            commands::validate::execute(
                &suite,
                &data,
                &format,
                results_dir.as_deref(),
                checkpoint.as_deref(),
                limit,
            )
            .await
        }

        Commands::Check { suite, format } => commands::check::execute(&suite, &format),

        Commands::Profile { data, name, output } => {
            commands::profile::execute(&data, name.as_deref(), output.as_deref()).await
        }

        Commands::Docs {
            results_dir,
            site_dir,
        } => commands::docs::execute(&results_dir, site_dir.as_deref()),
    }
}
