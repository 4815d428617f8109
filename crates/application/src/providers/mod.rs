//! Completion provider abstraction.
//!
//! A [`CompletionProvider`] turns a prompt into text plus token, latency,
//! and cost accounting. Providers are looked up through a
//! [`ProviderRegistry`] keyed by the model's `provider_type`; the registry
//! is built once at process init and never mutated afterwards.
//!
//! The bundled implementations are behaviorally distinct mock generators;
//! the abstraction point is where real backends would plug in.

mod anthropic;
mod mock;
mod openai;

pub use anthropic::AnthropicProvider;
pub use mock::MockProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use llm_eval_domain::model::ModelSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Standardized completion returned by all providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    /// Generated text
    pub content: String,
    /// Tokens consumed by prompt plus completion
    pub tokens_used: u32,
    /// Latency in milliseconds
    pub latency_ms: f64,
    /// Cost in USD, `tokens_used / 1000 * cost_per_1k_tokens`
    pub cost_usd: f64,
}

/// Errors raised by completion providers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// The backend rejected or failed the request
    #[error("Backend error: {0}")]
    Backend(String),

    /// The request did not complete in time
    #[error("Request timed out after {0} ms")]
    Timeout(u64),
}

/// Uniform contract for text-generation backends.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for the given prompt using `model`'s settings.
    async fn generate_completion(
        &self,
        model: &ModelSpec,
        prompt: &str,
    ) -> Result<Completion, ProviderError>;

    /// Estimate the token count for a piece of text.
    fn estimate_tokens(&self, text: &str) -> u32;

    /// The provider-type key this implementation serves.
    fn kind(&self) -> &'static str;
}

/// Registry mapping provider-type keys to implementations.
///
/// Construct with [`ProviderRegistry::with_defaults`] at process init and
/// hand it to an [`crate::context::EvaluationContext`]; lookups during a
/// run never mutate it.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn CompletionProvider>>,
}

impl ProviderRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in providers: `openai`, `anthropic`, `mock`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(OpenAiProvider));
        registry.register(Arc::new(AnthropicProvider));
        registry.register(Arc::new(MockProvider));
        registry
    }

    /// Register a provider under its own `kind()` key.
    pub fn register(&mut self, provider: Arc<dyn CompletionProvider>) {
        self.providers.insert(provider.kind().to_string(), provider);
    }

    /// Look up a provider by type key.
    pub fn get(&self, kind: &str) -> Option<Arc<dyn CompletionProvider>> {
        self.providers.get(kind).cloned()
    }

    /// Registered provider-type keys.
    pub fn kinds(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }
}

/// Deterministic latency simulation shared by the mock backends.
///
/// Maps the prompt onto `[base_ms, base_ms + span_ms)` so repeated calls
/// with the same prompt report the same latency.
pub(crate) fn simulated_latency_ms(prompt: &str, base_ms: u64, span_ms: u64) -> f64 {
    (base_ms + (prompt.len() as u64 * 7) % span_ms) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_model() -> ModelSpec {
        ModelSpec::new("Mock Model", "mock", "mock-model", 0.001, 2048)
    }

    #[test]
    fn test_default_registry_kinds() {
        let registry = ProviderRegistry::with_defaults();
        assert!(registry.get("openai").is_some());
        assert!(registry.get("anthropic").is_some());
        assert!(registry.get("mock").is_some());
        assert!(registry.get("local").is_none());
    }

    #[test]
    fn test_simulated_latency_band() {
        for len in 0..2000 {
            let prompt = "x".repeat(len);
            let latency = simulated_latency_ms(&prompt, 100, 400);
            assert!((100.0..500.0).contains(&latency));
        }
    }

    #[tokio::test]
    async fn test_cost_round_trip() {
        let registry = ProviderRegistry::with_defaults();
        let model = mock_model();
        let provider = registry.get("mock").unwrap();

        let completion = provider
            .generate_completion(&model, "Summarize this article about markets.")
            .await
            .unwrap();

        assert_eq!(
            completion.cost_usd,
            model.cost_for_tokens(completion.tokens_used)
        );
    }

    #[tokio::test]
    async fn test_completions_are_deterministic() {
        let registry = ProviderRegistry::with_defaults();
        let model = mock_model();

        for kind in ["openai", "anthropic", "mock"] {
            let provider = registry.get(kind).unwrap();
            let first = provider
                .generate_completion(&model, "What is the capital of Australia?")
                .await
                .unwrap();
            let second = provider
                .generate_completion(&model, "What is the capital of Australia?")
                .await
                .unwrap();

            assert_eq!(first.content, second.content);
            assert_eq!(first.tokens_used, second.tokens_used);
            assert_eq!(first.latency_ms, second.latency_ms);
            assert_eq!(first.cost_usd, second.cost_usd);
        }
    }
}
