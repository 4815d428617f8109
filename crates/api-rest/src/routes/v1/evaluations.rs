//! Evaluation run endpoints.

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use llm_eval_application::{EvaluationReport, EvaluationRequest};
use llm_eval_domain::{
    identifiers::{ModelId, RunId, TestCaseId},
    metrics::PerformanceMetrics,
    run::{EvaluationRun, RunStatus},
    test_case::TestCategory,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for starting an evaluation
#[derive(Debug, Deserialize)]
pub struct StartEvaluationRequest {
    pub name: String,
    pub model_ids: Vec<Uuid>,
    #[serde(default)]
    pub test_case_ids: Option<Vec<Uuid>>,
    #[serde(default)]
    pub categories: Option<Vec<TestCategory>>,
}

/// Response for a started evaluation
#[derive(Debug, Serialize, Deserialize)]
pub struct StartEvaluationResponse {
    pub run_id: String,
    pub status: RunStatus,
}

/// Evaluation run list item
#[derive(Debug, Serialize, Deserialize)]
pub struct RunResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: RunStatus,
    pub created_at: String,
}

impl From<EvaluationRun> for RunResponse {
    fn from(run: EvaluationRun) -> Self {
        Self {
            id: run.id.to_string(),
            name: run.name,
            description: run.description,
            status: run.status,
            created_at: run.created_at.to_rfc3339(),
        }
    }
}

/// Aggregated metrics list item
#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub model_id: String,
    pub category: String,
    pub avg_accuracy: f64,
    pub avg_response_time: f64,
    pub total_cost: f64,
    pub total_tokens: u64,
    pub success_rate: f64,
    pub accuracy_rank: u32,
    pub speed_rank: u32,
    pub cost_rank: u32,
    pub overall_rank: u32,
}

impl From<PerformanceMetrics> for MetricsResponse {
    fn from(metrics: PerformanceMetrics) -> Self {
        Self {
            model_id: metrics.model_id.to_string(),
            category: metrics.scope.as_str().to_string(),
            avg_accuracy: metrics.avg_accuracy,
            avg_response_time: metrics.avg_response_time,
            total_cost: metrics.total_cost,
            total_tokens: metrics.total_tokens,
            success_rate: metrics.success_rate,
            accuracy_rank: metrics.accuracy_rank,
            speed_rank: metrics.speed_rank,
            cost_rank: metrics.cost_rank,
            overall_rank: metrics.overall_rank,
        }
    }
}

/// Evaluation routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/evaluations", post(start_evaluation).get(list_evaluations))
        .route("/evaluations/:id", get(get_evaluation))
        .route("/evaluations/:id/results", get(get_evaluation_results))
        .route("/evaluations/:id/metrics", get(get_evaluation_metrics))
}

/// Start a new evaluation run in the background
///
/// Returns 202 with the run id; poll the run or its results to observe
/// progress. Input-validation failures return 400 before any run exists.
async fn start_evaluation(
    State(state): State<AppState>,
    Json(request): Json<StartEvaluationRequest>,
) -> ApiResult<(StatusCode, Json<StartEvaluationResponse>)> {
    let request = EvaluationRequest {
        name: request.name,
        model_ids: request.model_ids.into_iter().map(ModelId::from).collect(),
        test_case_ids: request
            .test_case_ids
            .map(|ids| ids.into_iter().map(TestCaseId::from).collect()),
        categories: request.categories,
    };

    let run_id = state.orchestrator.start_run(request).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(StartEvaluationResponse {
            run_id: run_id.to_string(),
            status: RunStatus::Running,
        }),
    ))
}

/// Get all evaluation runs, newest first
async fn list_evaluations(State(state): State<AppState>) -> ApiResult<Json<Vec<RunResponse>>> {
    let runs = state.repository.list_runs().await?;
    Ok(Json(runs.into_iter().map(RunResponse::from).collect()))
}

/// Get one evaluation run
async fn get_evaluation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<RunResponse>> {
    let run_id = RunId::from_uuid(id);
    let run = state
        .repository
        .get_run(run_id)
        .await?
        .ok_or(ApiError::Eval(llm_eval_domain::EvalError::RunNotFound(
            run_id,
        )))?;
    Ok(Json(RunResponse::from(run)))
}

/// Get the full result bundle for an evaluation run
async fn get_evaluation_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<EvaluationReport>> {
    let report = state
        .orchestrator
        .get_run_report(RunId::from_uuid(id))
        .await?;
    Ok(Json(report))
}

/// Get the aggregated metrics for an evaluation run
async fn get_evaluation_metrics(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Vec<MetricsResponse>>> {
    let run_id = RunId::from_uuid(id);
    // Distinguish an unknown run from a run without metrics yet
    state
        .repository
        .get_run(run_id)
        .await?
        .ok_or(ApiError::Eval(llm_eval_domain::EvalError::RunNotFound(
            run_id,
        )))?;

    let metrics = state.repository.get_metrics(run_id).await?;
    Ok(Json(metrics.into_iter().map(MetricsResponse::from).collect()))
}
