//! Response scoring.
//!
//! A [`ResponseScorer`] is a pure function from (test case, model output)
//! to a normalized score in [0, 1] plus human-readable feedback. Scorers
//! are selected through a [`ScorerRegistry`] keyed by test category.

mod extract;
mod scorers;

pub use extract::score_from_text;
pub use scorers::{QaScorer, ReasoningScorer, SummarizationScorer};

use llm_eval_domain::test_case::{TestCase, TestCategory};
use std::collections::HashMap;
use std::sync::Arc;

/// Verdict produced by a scorer.
#[derive(Debug, Clone)]
pub struct ScoreOutcome {
    /// Normalized score in [0, 1]
    pub score: f64,
    /// Evaluation text recorded as the result's agent feedback
    pub feedback: String,
}

/// Category-specific scoring heuristic.
pub trait ResponseScorer: Send + Sync {
    /// Score a model's output against the test case.
    fn score(&self, case: &TestCase, output: &str) -> ScoreOutcome;

    /// The category this scorer serves.
    fn category(&self) -> TestCategory;
}

/// Registry mapping test categories to scorers.
///
/// Built once at process init; lookups during a run never mutate it.
#[derive(Default)]
pub struct ScorerRegistry {
    scorers: HashMap<TestCategory, Arc<dyn ResponseScorer>>,
}

impl ScorerRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in scorers for all known categories.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SummarizationScorer));
        registry.register(Arc::new(QaScorer));
        registry.register(Arc::new(ReasoningScorer));
        registry
    }

    /// Register a scorer under its own `category()` key.
    pub fn register(&mut self, scorer: Arc<dyn ResponseScorer>) {
        self.scorers.insert(scorer.category(), scorer);
    }

    /// Look up the scorer for a category.
    pub fn get(&self, category: TestCategory) -> Option<Arc<dyn ResponseScorer>> {
        self.scorers.get(&category).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_covers_all_categories() {
        let registry = ScorerRegistry::with_defaults();
        for category in TestCategory::ALL {
            let scorer = registry.get(category).unwrap();
            assert_eq!(scorer.category(), category);
        }
    }

    #[test]
    fn test_empty_registry_misses() {
        let registry = ScorerRegistry::new();
        assert!(registry.get(TestCategory::Qa).is_none());
    }
}
