//! Per-pair evaluation result rows.

use crate::identifiers::{ModelId, ResultId, RunId, TestCaseId};
use crate::test_case::TestCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of evaluating one (model, test case) pair within a run.
///
/// A row with a non-null `error_message` is a failed attempt: it still
/// counts toward a group's `total_count` during aggregation but is excluded
/// from score/latency/cost averages and the success-rate numerator.
///
/// The test case's category is denormalized onto the row so aggregation
/// never needs to resolve test cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Row identifier
    pub id: ResultId,
    /// Run this result belongs to
    pub run_id: RunId,
    /// Model that produced the output
    pub model_id: ModelId,
    /// Test case that was evaluated
    pub test_case_id: TestCaseId,
    /// Category of the test case at run time
    pub category: TestCategory,
    /// Raw model output (empty on failure)
    pub model_output: String,
    /// Normalized score in [0, 1] (0.0 on failure)
    pub accuracy_score: f64,
    /// Provider-reported latency in milliseconds
    pub response_time_ms: f64,
    /// Tokens consumed by the completion
    pub tokens_used: u32,
    /// Cost of the completion in USD
    pub cost_usd: f64,
    /// Set iff the pair's attempt failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Scorer's textual rationale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_feedback: Option<String>,
    /// Persistence timestamp
    pub created_at: DateTime<Utc>,
}

impl EvaluationResult {
    /// A failed attempt: zero score, zero cost/tokens/latency, empty output.
    pub fn failed(
        run_id: RunId,
        model_id: ModelId,
        test_case_id: TestCaseId,
        category: TestCategory,
        error: impl Into<String>,
    ) -> Self {
        Self {
            id: ResultId::new(),
            run_id,
            model_id,
            test_case_id,
            category,
            model_output: String::new(),
            accuracy_score: 0.0,
            response_time_ms: 0.0,
            tokens_used: 0,
            cost_usd: 0.0,
            error_message: Some(error.into()),
            agent_feedback: None,
            created_at: Utc::now(),
        }
    }

    /// Whether the attempt succeeded.
    pub fn is_success(&self) -> bool {
        self.error_message.is_none()
    }
}
