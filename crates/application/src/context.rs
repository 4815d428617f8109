//! Per-process evaluation context.
//!
//! Holds the provider and scorer registries as plain immutable maps. The
//! context is constructed once at process init and passed to orchestration
//! calls explicitly. There are no global singleton engine instances.

use crate::providers::{CompletionProvider, ProviderRegistry};
use crate::scoring::{ResponseScorer, ScorerRegistry};
use llm_eval_domain::test_case::TestCategory;
use std::sync::Arc;

/// Immutable registries consumed by the orchestrator.
pub struct EvaluationContext {
    providers: ProviderRegistry,
    scorers: ScorerRegistry,
}

impl EvaluationContext {
    /// Context with the built-in providers and scorers.
    pub fn with_defaults() -> Self {
        Self {
            providers: ProviderRegistry::with_defaults(),
            scorers: ScorerRegistry::with_defaults(),
        }
    }

    /// Context over explicit registries.
    pub fn new(providers: ProviderRegistry, scorers: ScorerRegistry) -> Self {
        Self { providers, scorers }
    }

    /// Look up a completion provider by type key.
    pub fn provider(&self, kind: &str) -> Option<Arc<dyn CompletionProvider>> {
        self.providers.get(kind)
    }

    /// Look up the scorer for a category.
    pub fn scorer(&self, category: TestCategory) -> Option<Arc<dyn ResponseScorer>> {
        self.scorers.get(category)
    }
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Builder for assembling a context with custom registrations.
#[derive(Default)]
pub struct EvaluationContextBuilder {
    providers: ProviderRegistry,
    scorers: ScorerRegistry,
}

impl EvaluationContextBuilder {
    /// Start from empty registries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the default registries.
    pub fn with_defaults() -> Self {
        Self {
            providers: ProviderRegistry::with_defaults(),
            scorers: ScorerRegistry::with_defaults(),
        }
    }

    /// Add (or replace) a provider registration.
    pub fn provider(mut self, provider: Arc<dyn CompletionProvider>) -> Self {
        self.providers.register(provider);
        self
    }

    /// Add (or replace) a scorer registration.
    pub fn scorer(mut self, scorer: Arc<dyn ResponseScorer>) -> Self {
        self.scorers.register(scorer);
        self
    }

    /// Finalize into an immutable context.
    pub fn build(self) -> EvaluationContext {
        EvaluationContext::new(self.providers, self.scorers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_resolves_known_kinds() {
        let context = EvaluationContext::with_defaults();
        assert!(context.provider("mock").is_some());
        assert!(context.provider("local").is_none());
        assert!(context.scorer(TestCategory::Reasoning).is_some());
    }

    #[test]
    fn test_builder_starts_empty() {
        let context = EvaluationContextBuilder::new().build();
        assert!(context.provider("mock").is_none());
        assert!(context.scorer(TestCategory::Qa).is_none());
    }
}
