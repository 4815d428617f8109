//! `serve` command: boot the REST API over a seeded in-memory store.

use anyhow::{Context, Result};
use clap::Args;
use llm_eval_api_rest::{create_app, ApiConfig, AppState};
use tracing::info;

/// Arguments for the `serve` command.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,
}

pub async fn serve(args: ServeArgs) -> Result<()> {
    let config = ApiConfig {
        host: args.host,
        port: args.port,
        ..ApiConfig::default()
    };

    let state = AppState::with_default_catalog().await?;
    let app = create_app(&config, state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    info!(addr = %config.bind_addr(), "LLM Evaluation Framework API listening");

    axum::serve(listener, app).await?;
    Ok(())
}
