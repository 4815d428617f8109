//! LLM Evaluation Framework API server.

use anyhow::Context;
use llm_eval_api_rest::{create_app, ApiConfig, AppState};
use llm_eval_common::telemetry::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    init_tracing(config.json_logs, &config.log_level)?;

    let state = AppState::with_default_catalog().await?;
    let app = create_app(&config, state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    info!(addr = %config.bind_addr(), "LLM Evaluation Framework API listening");

    axum::serve(listener, app).await?;
    Ok(())
}
