//! Model catalog endpoints.

use crate::{error::ApiResult, state::AppState};
use axum::{extract::State, routing::get, Json, Router};
use llm_eval_domain::model::ModelSpec;
use serde::{Deserialize, Serialize};

/// Model list item
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelResponse {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub model_id: String,
    pub cost_per_1k_tokens: f64,
    pub max_tokens: u32,
    pub is_active: bool,
}

impl From<ModelSpec> for ModelResponse {
    fn from(model: ModelSpec) -> Self {
        Self {
            id: model.id.to_string(),
            name: model.name,
            provider: model.provider_type,
            model_id: model.model_id,
            cost_per_1k_tokens: model.cost_per_1k_tokens,
            max_tokens: model.max_tokens,
            is_active: model.is_active,
        }
    }
}

/// Model routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/models", get(list_models))
}

/// Get all active LLM models
async fn list_models(State(state): State<AppState>) -> ApiResult<Json<Vec<ModelResponse>>> {
    let models = state.repository.list_active_models().await?;
    Ok(Json(models.into_iter().map(ModelResponse::from).collect()))
}
