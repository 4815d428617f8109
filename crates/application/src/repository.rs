//! Storage port consumed by the evaluation core.
//!
//! Concrete adapters live in `llm-eval-infrastructure`; the core only sees
//! this trait. Writes are transactional per logical unit: one result row,
//! or one full metrics batch.

use async_trait::async_trait;
use llm_eval_domain::{
    identifiers::{ModelId, RunId, TestCaseId},
    metrics::PerformanceMetrics,
    model::ModelSpec,
    result::EvaluationResult,
    run::{EvaluationRun, RunStatus},
    test_case::{TestCase, TestCategory},
    EvalResult,
};

/// Abstract CRUD over runs, models, test cases, results, and metrics.
#[async_trait]
pub trait EvaluationRepository: Send + Sync {
    /// Create a run in `Running` state and return it.
    async fn create_run(&self, name: &str, description: &str) -> EvalResult<EvaluationRun>;

    /// Transition a run's status.
    async fn set_run_status(&self, run_id: RunId, status: RunStatus) -> EvalResult<()>;

    /// Fetch a run by id.
    async fn get_run(&self, run_id: RunId) -> EvalResult<Option<EvaluationRun>>;

    /// All runs, newest first.
    async fn list_runs(&self) -> EvalResult<Vec<EvaluationRun>>;

    /// Add a model to the catalog.
    async fn add_model(&self, model: ModelSpec) -> EvalResult<()>;

    /// All active models in the catalog.
    async fn list_active_models(&self) -> EvalResult<Vec<ModelSpec>>;

    /// The subset of `ids` that exists and is active, in catalog order.
    async fn get_active_models(&self, ids: &[ModelId]) -> EvalResult<Vec<ModelSpec>>;

    /// Add a test case to the catalog.
    async fn add_test_case(&self, case: TestCase) -> EvalResult<()>;

    /// Test cases, restricted by ids and/or categories when given; both
    /// filters combine.
    async fn get_test_cases(
        &self,
        ids: Option<&[TestCaseId]>,
        categories: Option<&[TestCategory]>,
    ) -> EvalResult<Vec<TestCase>>;

    /// Persist one result row.
    async fn save_result(&self, result: EvaluationResult) -> EvalResult<()>;

    /// All result rows for a run, in insertion order.
    async fn get_results(&self, run_id: RunId) -> EvalResult<Vec<EvaluationResult>>;

    /// Persist a full metrics batch atomically.
    async fn save_metrics(&self, batch: Vec<PerformanceMetrics>) -> EvalResult<()>;

    /// All metrics rows for a run, in insertion order.
    async fn get_metrics(&self, run_id: RunId) -> EvalResult<Vec<PerformanceMetrics>>;
}
