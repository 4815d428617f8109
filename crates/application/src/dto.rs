//! Request and report payloads exchanged with callers.

use llm_eval_domain::{
    identifiers::{ModelId, RunId, TestCaseId},
    metrics::PerformanceMetrics,
    result::EvaluationResult,
    run::{EvaluationRun, RunStatus},
    test_case::TestCategory,
};
use serde::{Deserialize, Serialize};

/// Parameters for starting an evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Run name
    pub name: String,
    /// Models to evaluate (inactive ids are dropped during resolution)
    pub model_ids: Vec<ModelId>,
    /// Restrict to these test cases, when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_case_ids: Option<Vec<TestCaseId>>,
    /// Restrict to these categories, when given; combines with the id filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<TestCategory>>,
}

impl EvaluationRequest {
    /// Request covering the full test-case catalog for the given models.
    pub fn all_cases(name: impl Into<String>, model_ids: Vec<ModelId>) -> Self {
        Self {
            name: name.into(),
            model_ids,
            test_case_ids: None,
            categories: None,
        }
    }
}

/// Outcome summary returned by a blocking evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// The run that was executed
    pub run_id: RunId,
    /// Terminal status of the run
    pub status: RunStatus,
    /// Number of result rows produced (one per attempted pair)
    pub total_results: usize,
    /// Number of models in the resolved matrix
    pub models_evaluated: usize,
    /// Number of test cases in the resolved matrix
    pub test_cases_run: usize,
}

/// Counts and distinct sets over a run's results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total result rows
    pub total_results: usize,
    /// Rows without an error message
    pub successful_results: usize,
    /// Distinct categories seen, in first-seen order
    pub categories: Vec<TestCategory>,
    /// Distinct models seen, in first-seen order
    pub models: Vec<ModelId>,
}

/// Full result bundle for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Run metadata
    pub run: EvaluationRun,
    /// Per-pair result rows
    pub results: Vec<EvaluationResult>,
    /// Aggregated metrics rows (empty while the run is in progress)
    pub metrics: Vec<PerformanceMetrics>,
    /// Counts and distinct sets
    pub summary: ReportSummary,
}

impl EvaluationReport {
    /// Assemble a report, deriving the summary from the result rows.
    pub fn new(
        run: EvaluationRun,
        results: Vec<EvaluationResult>,
        metrics: Vec<PerformanceMetrics>,
    ) -> Self {
        let mut categories: Vec<TestCategory> = Vec::new();
        let mut models: Vec<ModelId> = Vec::new();
        for result in &results {
            if !categories.contains(&result.category) {
                categories.push(result.category);
            }
            if !models.contains(&result.model_id) {
                models.push(result.model_id);
            }
        }

        let summary = ReportSummary {
            total_results: results.len(),
            successful_results: results.iter().filter(|r| r.is_success()).count(),
            categories,
            models,
        };

        Self {
            run,
            results,
            metrics,
            summary,
        }
    }
}
