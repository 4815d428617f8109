//! LLM model catalog entries.

use crate::identifiers::ModelId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A model registered in the evaluation catalog.
///
/// Entries are immutable for the duration of a run; the catalog itself is
/// owned by the repository layer. `provider_type` selects the completion
/// provider implementation, while `model_id` is the provider-specific model
/// identifier passed through to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ModelSpec {
    /// Catalog identifier
    pub id: ModelId,
    /// Human-readable display name (unique within the catalog)
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Provider registry key, e.g. "openai", "anthropic", "mock"
    #[validate(length(min = 1, max = 50))]
    pub provider_type: String,
    /// Provider-specific model identifier, e.g. "gpt-4"
    #[validate(length(min = 1, max = 200))]
    pub model_id: String,
    /// Cost per 1000 tokens in USD
    #[validate(range(min = 0.0))]
    pub cost_per_1k_tokens: f64,
    /// Maximum tokens the model accepts per request
    #[validate(range(min = 1))]
    pub max_tokens: u32,
    /// Inactive models are skipped when resolving a run's model set
    pub is_active: bool,
}

impl ModelSpec {
    /// Create an active model entry with a fresh id.
    pub fn new(
        name: impl Into<String>,
        provider_type: impl Into<String>,
        model_id: impl Into<String>,
        cost_per_1k_tokens: f64,
        max_tokens: u32,
    ) -> Self {
        Self {
            id: ModelId::new(),
            name: name.into(),
            provider_type: provider_type.into(),
            model_id: model_id.into(),
            cost_per_1k_tokens,
            max_tokens,
            is_active: true,
        }
    }

    /// Cost in USD for a given token count at this model's rate.
    pub fn cost_for_tokens(&self, tokens: u32) -> f64 {
        tokens as f64 / 1000.0 * self.cost_per_1k_tokens
    }
}
