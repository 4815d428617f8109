//! Health check endpoint.

use crate::state::AppState;
use axum::{routing::get, Json, Router};
use serde_json::json;

/// Health check routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "llm-eval-api",
    }))
}
