//! Evaluation orchestration.
//!
//! The orchestrator drives one full run: it resolves the model/test-case
//! matrix, fans the (model x test case) pairs out to providers under a
//! bounded pool, scores each completion, persists one result row per pair
//! (tolerating partial failure), then triggers aggregation and finalizes
//! the run status.

use crate::aggregator::MetricsAggregator;
use crate::context::EvaluationContext;
use crate::dto::{EvaluationReport, EvaluationRequest, RunSummary};
use crate::repository::EvaluationRepository;
use chrono::Utc;
use llm_eval_domain::{
    identifiers::{ResultId, RunId},
    model::ModelSpec,
    result::EvaluationResult,
    run::RunStatus,
    test_case::TestCase,
    EvalError, EvalResult,
};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info, instrument, warn};

/// Orchestrator tuning knobs.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Maximum pairs evaluated concurrently within one run
    pub max_concurrent_pairs: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            max_concurrent_pairs: 8,
        }
    }
}

/// Drives evaluation runs against the repository and registries.
///
/// Cloning is cheap (all state is behind `Arc`s); background runs clone
/// the orchestrator into their task.
#[derive(Clone)]
pub struct EvaluationOrchestrator {
    repository: Arc<dyn EvaluationRepository>,
    context: Arc<EvaluationContext>,
    aggregator: MetricsAggregator,
    config: OrchestratorConfig,
}

impl EvaluationOrchestrator {
    /// Create an orchestrator with default configuration.
    pub fn new(repository: Arc<dyn EvaluationRepository>, context: Arc<EvaluationContext>) -> Self {
        Self::with_config(repository, context, OrchestratorConfig::default())
    }

    /// Create an orchestrator with explicit configuration.
    pub fn with_config(
        repository: Arc<dyn EvaluationRepository>,
        context: Arc<EvaluationContext>,
        config: OrchestratorConfig,
    ) -> Self {
        let aggregator = MetricsAggregator::new(Arc::clone(&repository));
        Self {
            repository,
            context,
            aggregator,
            config,
        }
    }

    /// Run a complete evaluation, blocking until every pair is attempted
    /// and metrics are persisted.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn run_evaluation(&self, request: EvaluationRequest) -> EvalResult<RunSummary> {
        let (models, cases) = self.resolve_matrix(&request).await?;
        let run = self.create_run(&request.name, &models).await?;

        let total_results = self.execute(run.id, &models, &cases).await?;

        info!(run_id = %run.id, total_results, "Completed evaluation run");
        Ok(RunSummary {
            run_id: run.id,
            status: RunStatus::Completed,
            total_results,
            models_evaluated: models.len(),
            test_cases_run: cases.len(),
        })
    }

    /// Start an evaluation in the background and return its id immediately.
    ///
    /// Input validation happens before the run row is created, so a
    /// rejected request never leaves an orphan run. The spawned task is the
    /// run's only driver; callers observe progress by polling
    /// [`Self::get_run_report`] (or the run status directly).
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn start_run(&self, request: EvaluationRequest) -> EvalResult<RunId> {
        let (models, cases) = self.resolve_matrix(&request).await?;
        let run = self.create_run(&request.name, &models).await?;

        let run_id = run.id;
        let orchestrator = self.clone();
        tokio::spawn(async move {
            if let Err(err) = orchestrator.execute(run_id, &models, &cases).await {
                error!(%run_id, error = %err, "Background evaluation run failed");
            }
        });

        Ok(run_id)
    }

    /// Fetch the full result bundle for a run.
    pub async fn get_run_report(&self, run_id: RunId) -> EvalResult<EvaluationReport> {
        let run = self
            .repository
            .get_run(run_id)
            .await?
            .ok_or(EvalError::RunNotFound(run_id))?;
        let results = self.repository.get_results(run_id).await?;
        let metrics = self.repository.get_metrics(run_id).await?;
        Ok(EvaluationReport::new(run, results, metrics))
    }

    /// Resolve the run's model and test-case sets, or fail with an
    /// input-validation error before anything is persisted.
    async fn resolve_matrix(
        &self,
        request: &EvaluationRequest,
    ) -> EvalResult<(Vec<ModelSpec>, Vec<TestCase>)> {
        let models = self
            .repository
            .get_active_models(&request.model_ids)
            .await?;
        if models.is_empty() {
            return Err(EvalError::NoActiveModels);
        }

        let cases = self
            .repository
            .get_test_cases(
                request.test_case_ids.as_deref(),
                request.categories.as_deref(),
            )
            .await?;
        if cases.is_empty() {
            return Err(EvalError::NoTestCases);
        }

        Ok((models, cases))
    }

    async fn create_run(
        &self,
        name: &str,
        models: &[ModelSpec],
    ) -> EvalResult<llm_eval_domain::EvaluationRun> {
        let run = self
            .repository
            .create_run(name, &format!("Evaluation of {} models", models.len()))
            .await?;
        info!(run_id = %run.id, models = models.len(), "Started evaluation run");
        Ok(run)
    }

    /// Attempt every pair, aggregate, and finalize the run status.
    ///
    /// Pair-level failures are absorbed into failed result rows; anything
    /// else marks the run `Failed` and propagates.
    async fn execute(
        &self,
        run_id: RunId,
        models: &[ModelSpec],
        cases: &[TestCase],
    ) -> EvalResult<usize> {
        match self.drive(run_id, models, cases).await {
            Ok(total_results) => {
                self.repository
                    .set_run_status(run_id, RunStatus::Completed)
                    .await?;
                Ok(total_results)
            }
            Err(err) => {
                if let Err(status_err) = self
                    .repository
                    .set_run_status(run_id, RunStatus::Failed)
                    .await
                {
                    error!(%run_id, error = %status_err, "Failed to mark run as failed");
                }
                Err(err)
            }
        }
    }

    async fn drive(
        &self,
        run_id: RunId,
        models: &[ModelSpec],
        cases: &[TestCase],
    ) -> EvalResult<usize> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_pairs));
        let mut pairs: JoinSet<EvalResult<()>> = JoinSet::new();

        for model in models {
            for case in cases {
                let semaphore = Arc::clone(&semaphore);
                let repository = Arc::clone(&self.repository);
                let context = Arc::clone(&self.context);
                let model = model.clone();
                let case = case.clone();

                pairs.spawn(async move {
                    let _permit = match semaphore.acquire_owned().await {
                        Ok(permit) => permit,
                        // Closed semaphore means the pool is shutting down
                        Err(_) => return Ok(()),
                    };
                    Self::evaluate_pair(repository, context, run_id, model, case).await
                });
            }
        }

        let mut total_results = 0usize;
        while let Some(joined) = pairs.join_next().await {
            match joined {
                Ok(Ok(())) => total_results += 1,
                // A pair that could not even record its failure row is
                // fatal to the run.
                Ok(Err(err)) => return Err(err),
                Err(join_err) => {
                    return Err(EvalError::Internal(format!(
                        "Pair task panicked: {join_err}"
                    )))
                }
            }
        }

        self.aggregator.aggregate(run_id, models).await?;
        Ok(total_results)
    }

    /// Evaluate one (model, test case) pair and persist exactly one row.
    ///
    /// Provider, scorer-lookup, and scoring failures are recorded as a
    /// failed row; only a failure to persist that row escapes.
    async fn evaluate_pair(
        repository: Arc<dyn EvaluationRepository>,
        context: Arc<EvaluationContext>,
        run_id: RunId,
        model: ModelSpec,
        case: TestCase,
    ) -> EvalResult<()> {
        let row = match Self::attempt_pair(&context, run_id, &model, &case).await {
            Ok(row) => row,
            Err(err) => {
                warn!(
                    model = %model.name,
                    test_case = %case.name,
                    error = %err,
                    "Pair evaluation failed"
                );
                EvaluationResult::failed(run_id, model.id, case.id, case.category, err.to_string())
            }
        };

        repository.save_result(row).await
    }

    async fn attempt_pair(
        context: &EvaluationContext,
        run_id: RunId,
        model: &ModelSpec,
        case: &TestCase,
    ) -> EvalResult<EvaluationResult> {
        let provider = context
            .provider(&model.provider_type)
            .ok_or_else(|| EvalError::UnknownProvider(model.provider_type.clone()))?;

        let completion = provider
            .generate_completion(model, &case.input_text)
            .await
            .map_err(|err| EvalError::Provider(err.to_string()))?;

        let scorer = context
            .scorer(case.category)
            .ok_or(EvalError::NoScorerForCategory(case.category))?;
        let outcome = scorer.score(case, &completion.content);

        Ok(EvaluationResult {
            id: ResultId::new(),
            run_id,
            model_id: model.id,
            test_case_id: case.id,
            category: case.category,
            model_output: completion.content,
            accuracy_score: outcome.score,
            response_time_ms: completion.latency_ms,
            tokens_used: completion.tokens_used,
            cost_usd: completion.cost_usd,
            error_message: None,
            agent_feedback: Some(outcome.feedback),
            created_at: Utc::now(),
        })
    }
}
