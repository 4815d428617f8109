//! Integration tests for the evaluation orchestrator.
//!
//! Exercises full runs against the in-memory repository: matrix
//! resolution, pair isolation, background starts, and report retrieval.

use llm_eval_application::{
    EvaluationContext, EvaluationContextBuilder, EvaluationOrchestrator, EvaluationRepository,
    EvaluationRequest, OrchestratorConfig,
};
use llm_eval_domain::{
    identifiers::{ModelId, RunId},
    run::RunStatus,
    test_case::TestCategory,
    EvalError,
};
use llm_eval_infrastructure::{seed_default_catalog, InMemoryEvaluationRepository};
use llm_eval_testing::{FailingProvider, ModelBuilder, TestCaseBuilder};
use std::sync::Arc;
use std::time::Duration;

async fn seeded_setup() -> (Arc<InMemoryEvaluationRepository>, Arc<EvaluationOrchestrator>, Vec<ModelId>) {
    let repository = Arc::new(InMemoryEvaluationRepository::new());
    seed_default_catalog(repository.as_ref()).await.unwrap();
    let model_ids: Vec<ModelId> = repository
        .list_active_models()
        .await
        .unwrap()
        .iter()
        .map(|model| model.id)
        .collect();

    let orchestrator = Arc::new(EvaluationOrchestrator::new(
        Arc::clone(&repository) as Arc<dyn EvaluationRepository>,
        Arc::new(EvaluationContext::with_defaults()),
    ));
    (repository, orchestrator, model_ids)
}

#[tokio::test]
async fn test_full_run_produces_one_result_per_pair() {
    let (repository, orchestrator, model_ids) = seeded_setup().await;

    let summary = orchestrator
        .run_evaluation(EvaluationRequest::all_cases("full matrix", model_ids))
        .await
        .unwrap();

    assert_eq!(summary.status, RunStatus::Completed);
    assert_eq!(summary.models_evaluated, 4);
    assert_eq!(summary.test_cases_run, 5);
    assert_eq!(summary.total_results, 20);

    let results = repository.get_results(summary.run_id).await.unwrap();
    assert_eq!(results.len(), 20);
    assert!(results.iter().all(|row| row.is_success()));

    let run = repository.get_run(summary.run_id).await.unwrap().unwrap();
    assert_eq!(run.status, RunStatus::Completed);
}

#[tokio::test]
async fn test_successful_pairs_satisfy_cost_round_trip() {
    let (repository, orchestrator, _) = seeded_setup().await;
    let models = repository.list_active_models().await.unwrap();
    let mock = models.iter().find(|m| m.provider_type == "mock").unwrap();

    let summary = orchestrator
        .run_evaluation(EvaluationRequest::all_cases("cost check", vec![mock.id]))
        .await
        .unwrap();

    let results = repository.get_results(summary.run_id).await.unwrap();
    assert_eq!(results.len(), 5);
    for row in results {
        assert!(row.is_success());
        assert_eq!(row.cost_usd, mock.cost_for_tokens(row.tokens_used));
        assert!(row.accuracy_score >= 0.0 && row.accuracy_score <= 1.0);
        assert!(row.agent_feedback.is_some());
    }
}

#[tokio::test]
async fn test_category_filter_restricts_matrix() {
    let (repository, orchestrator, model_ids) = seeded_setup().await;

    let request = EvaluationRequest {
        name: "reasoning only".to_string(),
        model_ids: vec![model_ids[0]],
        test_case_ids: None,
        categories: Some(vec![TestCategory::Reasoning]),
    };
    let summary = orchestrator.run_evaluation(request).await.unwrap();

    assert_eq!(summary.test_cases_run, 2);
    let results = repository.get_results(summary.run_id).await.unwrap();
    assert!(results
        .iter()
        .all(|row| row.category == TestCategory::Reasoning));
}

#[tokio::test]
async fn test_empty_model_set_fails_before_any_run_row() {
    let (repository, orchestrator, _) = seeded_setup().await;

    // An id that matches nothing in the catalog
    let request = EvaluationRequest::all_cases("no models", vec![ModelId::new()]);
    let err = orchestrator.run_evaluation(request).await.unwrap_err();

    assert!(matches!(err, EvalError::NoActiveModels));
    assert!(err.is_input_validation());
    // No orphan run was persisted
    assert!(repository.list_runs().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_inactive_models_are_not_resolved() {
    let repository = Arc::new(InMemoryEvaluationRepository::new());
    let inactive = ModelBuilder::new("mock").inactive().build();
    let inactive_id = inactive.id;
    repository.add_model(inactive).await.unwrap();
    repository
        .add_test_case(TestCaseBuilder::new(TestCategory::Qa).build())
        .await
        .unwrap();

    let orchestrator = EvaluationOrchestrator::new(
        Arc::clone(&repository) as Arc<dyn EvaluationRepository>,
        Arc::new(EvaluationContext::with_defaults()),
    );

    let err = orchestrator
        .run_evaluation(EvaluationRequest::all_cases("inactive", vec![inactive_id]))
        .await
        .unwrap_err();
    assert!(matches!(err, EvalError::NoActiveModels));
}

#[tokio::test]
async fn test_empty_case_set_fails_before_any_run_row() {
    let repository = Arc::new(InMemoryEvaluationRepository::new());
    let model = ModelBuilder::new("mock").build();
    let model_id = model.id;
    repository.add_model(model).await.unwrap();

    let orchestrator = EvaluationOrchestrator::new(
        Arc::clone(&repository) as Arc<dyn EvaluationRepository>,
        Arc::new(EvaluationContext::with_defaults()),
    );

    let err = orchestrator
        .run_evaluation(EvaluationRequest::all_cases("no cases", vec![model_id]))
        .await
        .unwrap_err();
    assert!(matches!(err, EvalError::NoTestCases));
    assert!(repository.list_runs().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_provider_failure_is_isolated_per_pair() {
    let repository = Arc::new(InMemoryEvaluationRepository::new());

    let healthy = ModelBuilder::new("mock").with_name("healthy").build();
    let broken = ModelBuilder::new("failing").with_name("broken").build();
    let healthy_id = healthy.id;
    let broken_id = broken.id;
    repository.add_model(healthy).await.unwrap();
    repository.add_model(broken).await.unwrap();
    repository
        .add_test_case(TestCaseBuilder::new(TestCategory::Qa).build())
        .await
        .unwrap();

    let context = EvaluationContextBuilder::with_defaults()
        .provider(Arc::new(FailingProvider))
        .build();
    let orchestrator = EvaluationOrchestrator::new(
        Arc::clone(&repository) as Arc<dyn EvaluationRepository>,
        Arc::new(context),
    );

    let summary = orchestrator
        .run_evaluation(EvaluationRequest::all_cases(
            "partial failure",
            vec![healthy_id, broken_id],
        ))
        .await
        .unwrap();

    // The failing pair did not abort the run
    assert_eq!(summary.status, RunStatus::Completed);
    assert_eq!(summary.total_results, 2);

    let results = repository.get_results(summary.run_id).await.unwrap();
    let broken_row = results.iter().find(|r| r.model_id == broken_id).unwrap();
    assert!(!broken_row.is_success());
    assert!(broken_row
        .error_message
        .as_deref()
        .unwrap()
        .contains("simulated backend outage"));
    assert_eq!(broken_row.accuracy_score, 0.0);
    assert_eq!(broken_row.cost_usd, 0.0);

    let healthy_row = results.iter().find(|r| r.model_id == healthy_id).unwrap();
    assert!(healthy_row.is_success());

    // The failed attempt counts toward total but not toward the averages
    let metrics = repository.get_metrics(summary.run_id).await.unwrap();
    let broken_overall = metrics
        .iter()
        .find(|m| m.model_id == broken_id && m.scope.as_str() == "overall")
        .unwrap();
    assert_eq!(broken_overall.success_rate, 0.0);
    assert_eq!(broken_overall.avg_accuracy, 0.0);
}

#[tokio::test]
async fn test_unknown_provider_type_is_isolated_per_pair() {
    let repository = Arc::new(InMemoryEvaluationRepository::new());
    let model = ModelBuilder::new("local").with_name("unregistered").build();
    let model_id = model.id;
    repository.add_model(model).await.unwrap();
    repository
        .add_test_case(TestCaseBuilder::new(TestCategory::Reasoning).build())
        .await
        .unwrap();

    let orchestrator = EvaluationOrchestrator::new(
        Arc::clone(&repository) as Arc<dyn EvaluationRepository>,
        Arc::new(EvaluationContext::with_defaults()),
    );

    let summary = orchestrator
        .run_evaluation(EvaluationRequest::all_cases("unknown provider", vec![model_id]))
        .await
        .unwrap();

    assert_eq!(summary.status, RunStatus::Completed);
    let results = repository.get_results(summary.run_id).await.unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0]
        .error_message
        .as_deref()
        .unwrap()
        .contains("Unknown provider type: local"));
}

#[tokio::test]
async fn test_start_run_returns_immediately_and_completes() {
    let (repository, orchestrator, model_ids) = seeded_setup().await;

    let run_id = orchestrator
        .start_run(EvaluationRequest::all_cases("background", model_ids))
        .await
        .unwrap();

    // The run row exists as soon as start_run returns
    assert!(repository.get_run(run_id).await.unwrap().is_some());

    // Poll until the background task finishes
    let mut status = RunStatus::Running;
    for _ in 0..200 {
        status = repository.get_run(run_id).await.unwrap().unwrap().status;
        if status.is_terminal() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(status, RunStatus::Completed);

    let report = orchestrator.get_run_report(run_id).await.unwrap();
    assert_eq!(report.summary.total_results, 20);
    assert!(!report.metrics.is_empty());
}

#[tokio::test]
async fn test_start_run_validation_failure_leaves_no_run() {
    let (repository, orchestrator, _) = seeded_setup().await;

    let err = orchestrator
        .start_run(EvaluationRequest::all_cases("invalid", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, EvalError::NoActiveModels));
    assert!(repository.list_runs().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_report_for_unknown_run_fails() {
    let (_, orchestrator, _) = seeded_setup().await;
    let err = orchestrator.get_run_report(RunId::new()).await.unwrap_err();
    assert!(matches!(err, EvalError::RunNotFound(_)));
}

#[tokio::test]
async fn test_rerunning_creates_disjoint_runs() {
    let (repository, orchestrator, model_ids) = seeded_setup().await;

    let first = orchestrator
        .run_evaluation(EvaluationRequest::all_cases("repeat", model_ids.clone()))
        .await
        .unwrap();
    let second = orchestrator
        .run_evaluation(EvaluationRequest::all_cases("repeat", model_ids))
        .await
        .unwrap();

    assert_ne!(first.run_id, second.run_id);
    assert_eq!(repository.get_results(first.run_id).await.unwrap().len(), 20);
    assert_eq!(repository.get_results(second.run_id).await.unwrap().len(), 20);
}

#[tokio::test]
async fn test_sequential_pool_matches_concurrent_pool() {
    let (_, _, model_ids) = seeded_setup().await;

    // Re-run the same matrix with a pool of one; counts must be identical
    let repository = Arc::new(InMemoryEvaluationRepository::new());
    seed_default_catalog(repository.as_ref()).await.unwrap();
    let ids: Vec<ModelId> = repository
        .list_active_models()
        .await
        .unwrap()
        .iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids.len(), model_ids.len());

    let orchestrator = EvaluationOrchestrator::with_config(
        Arc::clone(&repository) as Arc<dyn EvaluationRepository>,
        Arc::new(EvaluationContext::with_defaults()),
        OrchestratorConfig {
            max_concurrent_pairs: 1,
        },
    );

    let summary = orchestrator
        .run_evaluation(EvaluationRequest::all_cases("sequential", ids))
        .await
        .unwrap();
    assert_eq!(summary.total_results, 20);
}
