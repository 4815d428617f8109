//! Scripted and failing provider/scorer implementations.
//!
//! These let orchestration tests pin exact completions and scores per test
//! case, independent of pair execution order.

use async_trait::async_trait;
use llm_eval_application::providers::{Completion, CompletionProvider, ProviderError};
use llm_eval_application::scoring::{ResponseScorer, ScoreOutcome};
use llm_eval_domain::{
    model::ModelSpec,
    test_case::{TestCase, TestCategory},
};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Provider that always fails with a backend error.
pub struct FailingProvider;

#[async_trait]
impl CompletionProvider for FailingProvider {
    async fn generate_completion(
        &self,
        _model: &ModelSpec,
        _prompt: &str,
    ) -> Result<Completion, ProviderError> {
        Err(ProviderError::Backend("simulated backend outage".to_string()))
    }

    fn estimate_tokens(&self, text: &str) -> u32 {
        (text.len() / 4) as u32
    }

    fn kind(&self) -> &'static str {
        "failing"
    }
}

/// Scripted completion parameters for one prompt.
#[derive(Debug, Clone)]
pub struct ScriptedCompletion {
    pub content: String,
    pub tokens_used: u32,
    pub latency_ms: f64,
}

/// Provider returning prescribed completions keyed by prompt text.
///
/// Prompts without a script entry get a generic completion. Calls are
/// recorded for assertion.
#[derive(Default)]
pub struct ScriptedProvider {
    completions: HashMap<String, ScriptedCompletion>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prescribe the completion returned for `prompt`.
    pub fn with_completion(
        mut self,
        prompt: impl Into<String>,
        content: impl Into<String>,
        tokens_used: u32,
        latency_ms: f64,
    ) -> Self {
        self.completions.insert(
            prompt.into(),
            ScriptedCompletion {
                content: content.into(),
                tokens_used,
                latency_ms,
            },
        );
        self
    }

    /// Prompts this provider has served, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn generate_completion(
        &self,
        model: &ModelSpec,
        prompt: &str,
    ) -> Result<Completion, ProviderError> {
        self.calls.lock().push(prompt.to_string());

        let scripted = self.completions.get(prompt).cloned().unwrap_or_else(|| {
            ScriptedCompletion {
                content: "scripted output".to_string(),
                tokens_used: self.estimate_tokens(prompt),
                latency_ms: 100.0,
            }
        });

        Ok(Completion {
            cost_usd: model.cost_for_tokens(scripted.tokens_used),
            content: scripted.content,
            tokens_used: scripted.tokens_used,
            latency_ms: scripted.latency_ms,
        })
    }

    fn estimate_tokens(&self, text: &str) -> u32 {
        (text.len() / 4) as u32
    }

    fn kind(&self) -> &'static str {
        "scripted"
    }
}

/// Scorer returning prescribed scores keyed by test-case name.
pub struct ScriptedScorer {
    category: TestCategory,
    scores: HashMap<String, f64>,
    default_score: f64,
}

impl ScriptedScorer {
    pub fn new(category: TestCategory) -> Self {
        Self {
            category,
            scores: HashMap::new(),
            default_score: 0.5,
        }
    }

    /// Prescribe the score for a test case by name.
    pub fn with_score(mut self, case_name: impl Into<String>, score: f64) -> Self {
        self.scores.insert(case_name.into(), score);
        self
    }

    /// Score returned for unscripted cases.
    pub fn with_default_score(mut self, score: f64) -> Self {
        self.default_score = score;
        self
    }
}

impl ResponseScorer for ScriptedScorer {
    fn score(&self, case: &TestCase, _output: &str) -> ScoreOutcome {
        let score = self
            .scores
            .get(&case.name)
            .copied()
            .unwrap_or(self.default_score);
        ScoreOutcome {
            score,
            feedback: format!("Score: {:.1}\nFeedback: scripted verdict", score * 10.0),
        }
    }

    fn category(&self) -> TestCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failing_provider_always_errors() {
        let model = ModelSpec::new("m", "failing", "m", 0.001, 100);
        let result = FailingProvider.generate_completion(&model, "hello").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_scripted_provider_returns_prescription() {
        let provider = ScriptedProvider::new().with_completion("prompt-a", "out-a", 50, 100.0);
        let model = ModelSpec::new("m", "scripted", "m", 0.01, 100);

        let completion = provider.generate_completion(&model, "prompt-a").await.unwrap();
        assert_eq!(completion.content, "out-a");
        assert_eq!(completion.tokens_used, 50);
        assert_eq!(completion.latency_ms, 100.0);
        assert_eq!(completion.cost_usd, 0.0005);
        assert_eq!(provider.calls(), vec!["prompt-a".to_string()]);
    }

    #[test]
    fn test_scripted_scorer_prescription_and_default() {
        let scorer = ScriptedScorer::new(TestCategory::Qa)
            .with_score("case-a", 0.9)
            .with_default_score(0.2);

        let case_a = TestCase::new("case-a", TestCategory::Qa, "?");
        let case_b = TestCase::new("case-b", TestCategory::Qa, "?");
        assert_eq!(scorer.score(&case_a, "x").score, 0.9);
        assert_eq!(scorer.score(&case_b, "x").score, 0.2);
    }
}
