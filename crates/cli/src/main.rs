//! LLM Evaluation Framework CLI
//!
//! Run evaluations, inspect the catalog, and serve the REST API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use llm_eval_cli::commands::{self, RunArgs, ServeArgs};
use llm_eval_common::telemetry::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "llm-eval")]
#[command(author, version, about = "LLM Evaluation Framework CLI")]
#[command(long_about = "Evaluate and compare LLM providers across summarization, Q&A, and \
    reasoning test cases, with multi-criteria rankings over accuracy, latency, and cost.")]
#[command(propagate_version = true)]
struct Cli {
    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a blocking evaluation and print ranked metrics
    #[command(alias = "r")]
    Run(RunArgs),

    /// List the model catalog
    #[command(alias = "m")]
    Models,

    /// List the test-case catalog
    #[command(alias = "c")]
    Cases {
        /// Restrict to a single category
        #[arg(long)]
        category: Option<String>,
    },

    /// Serve the REST API
    #[command(alias = "s")]
    Serve(ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(false, &cli.log_level)?;

    match cli.command {
        Commands::Run(args) => commands::run(args).await,
        Commands::Models => commands::models().await,
        Commands::Cases { category } => commands::cases(category).await,
        Commands::Serve(args) => commands::serve(args).await,
    }
}
