//! In-memory repository adapter.
//!
//! Backed by `parking_lot::RwLock` maps. Result and metrics rows keep
//! insertion order, which the aggregator relies on for its documented
//! tie-break behavior. Suitable for the bundled binaries, demos, and tests.

use async_trait::async_trait;
use llm_eval_application::repository::EvaluationRepository;
use llm_eval_domain::{
    identifiers::{ModelId, RunId, TestCaseId},
    metrics::PerformanceMetrics,
    model::ModelSpec,
    result::EvaluationResult,
    run::{EvaluationRun, RunStatus},
    test_case::{TestCase, TestCategory},
    EvalError, EvalResult,
};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Thread-safe in-memory store for all five entity kinds.
#[derive(Default)]
pub struct InMemoryEvaluationRepository {
    runs: RwLock<Vec<EvaluationRun>>,
    models: RwLock<Vec<ModelSpec>>,
    test_cases: RwLock<Vec<TestCase>>,
    results: RwLock<Vec<EvaluationResult>>,
    metrics: RwLock<Vec<PerformanceMetrics>>,
}

impl InMemoryEvaluationRepository {
    /// An empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored result rows across all runs.
    pub fn result_count(&self) -> usize {
        self.results.read().len()
    }
}

#[async_trait]
impl EvaluationRepository for InMemoryEvaluationRepository {
    async fn create_run(&self, name: &str, description: &str) -> EvalResult<EvaluationRun> {
        let run = EvaluationRun::started(name, description);
        self.runs.write().push(run.clone());
        Ok(run)
    }

    async fn set_run_status(&self, run_id: RunId, status: RunStatus) -> EvalResult<()> {
        let mut runs = self.runs.write();
        let run = runs
            .iter_mut()
            .find(|run| run.id == run_id)
            .ok_or(EvalError::RunNotFound(run_id))?;
        if !run.status.can_transition_to(status) {
            return Err(EvalError::Repository(format!(
                "Run status transition not allowed: {} -> {}",
                run.status, status
            )));
        }
        run.status = status;
        Ok(())
    }

    async fn get_run(&self, run_id: RunId) -> EvalResult<Option<EvaluationRun>> {
        Ok(self.runs.read().iter().find(|run| run.id == run_id).cloned())
    }

    async fn list_runs(&self) -> EvalResult<Vec<EvaluationRun>> {
        let mut runs = self.runs.read().clone();
        runs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(runs)
    }

    async fn add_model(&self, model: ModelSpec) -> EvalResult<()> {
        let mut models = self.models.write();
        if models.iter().any(|existing| existing.name == model.name) {
            return Err(EvalError::Repository(format!(
                "Model name already exists: {}",
                model.name
            )));
        }
        models.push(model);
        Ok(())
    }

    async fn list_active_models(&self) -> EvalResult<Vec<ModelSpec>> {
        Ok(self
            .models
            .read()
            .iter()
            .filter(|model| model.is_active)
            .cloned()
            .collect())
    }

    async fn get_active_models(&self, ids: &[ModelId]) -> EvalResult<Vec<ModelSpec>> {
        Ok(self
            .models
            .read()
            .iter()
            .filter(|model| model.is_active && ids.contains(&model.id))
            .cloned()
            .collect())
    }

    async fn add_test_case(&self, case: TestCase) -> EvalResult<()> {
        self.test_cases.write().push(case);
        Ok(())
    }

    async fn get_test_cases(
        &self,
        ids: Option<&[TestCaseId]>,
        categories: Option<&[TestCategory]>,
    ) -> EvalResult<Vec<TestCase>> {
        Ok(self
            .test_cases
            .read()
            .iter()
            .filter(|case| ids.map_or(true, |ids| ids.contains(&case.id)))
            .filter(|case| {
                categories.map_or(true, |categories| categories.contains(&case.category))
            })
            .cloned()
            .collect())
    }

    async fn save_result(&self, result: EvaluationResult) -> EvalResult<()> {
        self.results.write().push(result);
        Ok(())
    }

    async fn get_results(&self, run_id: RunId) -> EvalResult<Vec<EvaluationResult>> {
        Ok(self
            .results
            .read()
            .iter()
            .filter(|result| result.run_id == run_id)
            .cloned()
            .collect())
    }

    async fn save_metrics(&self, batch: Vec<PerformanceMetrics>) -> EvalResult<()> {
        // Single write-lock acquisition keeps the batch atomic
        self.metrics.write().extend(batch);
        Ok(())
    }

    async fn get_metrics(&self, run_id: RunId) -> EvalResult<Vec<PerformanceMetrics>> {
        Ok(self
            .metrics
            .read()
            .iter()
            .filter(|metrics| metrics.run_id == run_id)
            .cloned()
            .collect())
    }
}

/// Lookup helper used by API handlers to render model names.
impl InMemoryEvaluationRepository {
    /// Map model ids to display names for the models currently stored.
    pub fn model_names(&self) -> HashMap<ModelId, String> {
        self.models
            .read()
            .iter()
            .map(|model| (model.id, model.name.clone()))
            .collect()
    }
}
