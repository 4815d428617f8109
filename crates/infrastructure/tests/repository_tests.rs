//! Tests for the in-memory repository adapter.

use llm_eval_application::repository::EvaluationRepository;
use llm_eval_domain::{
    identifiers::{ModelId, TestCaseId},
    metrics::{MetricsScope, PerformanceMetrics},
    model::ModelSpec,
    result::EvaluationResult,
    run::RunStatus,
    test_case::{TestCase, TestCategory},
};
use llm_eval_infrastructure::{seed_default_catalog, InMemoryEvaluationRepository};

#[tokio::test]
async fn test_run_lifecycle() {
    let repo = InMemoryEvaluationRepository::new();

    let run = repo.create_run("nightly", "Evaluation of 2 models").await.unwrap();
    assert_eq!(run.status, RunStatus::Running);

    repo.set_run_status(run.id, RunStatus::Completed).await.unwrap();
    let fetched = repo.get_run(run.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, RunStatus::Completed);

    // Terminal runs reject further transitions
    let err = repo.set_run_status(run.id, RunStatus::Failed).await;
    assert!(err.is_err());
}

#[tokio::test]
async fn test_get_run_unknown_id_is_none() {
    let repo = InMemoryEvaluationRepository::new();
    let missing = repo.get_run(llm_eval_domain::RunId::new()).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_list_runs_newest_first() {
    let repo = InMemoryEvaluationRepository::new();
    repo.create_run("first", "").await.unwrap();
    repo.create_run("second", "").await.unwrap();

    let runs = repo.list_runs().await.unwrap();
    assert_eq!(runs.len(), 2);
    assert!(runs[0].created_at >= runs[1].created_at);
}

#[tokio::test]
async fn test_active_model_resolution() {
    let repo = InMemoryEvaluationRepository::new();

    let active = ModelSpec::new("Active", "mock", "mock-model", 0.001, 2048);
    let mut inactive = ModelSpec::new("Inactive", "mock", "mock-model", 0.001, 2048);
    inactive.is_active = false;

    let active_id = active.id;
    let inactive_id = inactive.id;
    repo.add_model(active).await.unwrap();
    repo.add_model(inactive).await.unwrap();

    let resolved = repo
        .get_active_models(&[active_id, inactive_id, ModelId::new()])
        .await
        .unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, active_id);

    let listed = repo.list_active_models().await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_duplicate_model_name_rejected() {
    let repo = InMemoryEvaluationRepository::new();
    repo.add_model(ModelSpec::new("GPT-4", "openai", "gpt-4", 0.03, 8192))
        .await
        .unwrap();
    let dup = repo
        .add_model(ModelSpec::new("GPT-4", "openai", "gpt-4-turbo", 0.01, 8192))
        .await;
    assert!(dup.is_err());
}

#[tokio::test]
async fn test_test_case_filters_combine() {
    let repo = InMemoryEvaluationRepository::new();

    let qa = TestCase::new("qa case", TestCategory::Qa, "Why?");
    let summarization = TestCase::new("sum case", TestCategory::Summarization, "Summarize this");
    let reasoning = TestCase::new("reason case", TestCategory::Reasoning, "If A then B");

    let qa_id = qa.id;
    let reasoning_id = reasoning.id;
    for case in [qa, summarization, reasoning] {
        repo.add_test_case(case).await.unwrap();
    }

    // No filters: everything
    let all = repo.get_test_cases(None, None).await.unwrap();
    assert_eq!(all.len(), 3);

    // Category filter only
    let qa_only = repo
        .get_test_cases(None, Some(&[TestCategory::Qa]))
        .await
        .unwrap();
    assert_eq!(qa_only.len(), 1);
    assert_eq!(qa_only[0].id, qa_id);

    // Id filter and category filter combine
    let combined = repo
        .get_test_cases(Some(&[qa_id, reasoning_id]), Some(&[TestCategory::Reasoning]))
        .await
        .unwrap();
    assert_eq!(combined.len(), 1);
    assert_eq!(combined[0].id, reasoning_id);
}

#[tokio::test]
async fn test_results_are_scoped_to_their_run() {
    let repo = InMemoryEvaluationRepository::new();
    let run_a = repo.create_run("a", "").await.unwrap();
    let run_b = repo.create_run("b", "").await.unwrap();

    let row = EvaluationResult::failed(
        run_a.id,
        ModelId::new(),
        TestCaseId::new(),
        TestCategory::Qa,
        "backend error",
    );
    repo.save_result(row).await.unwrap();

    assert_eq!(repo.get_results(run_a.id).await.unwrap().len(), 1);
    assert!(repo.get_results(run_b.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_metrics_batch_round_trip() {
    let repo = InMemoryEvaluationRepository::new();
    let run = repo.create_run("metrics", "").await.unwrap();
    let model_id = ModelId::new();

    let batch = vec![
        PerformanceMetrics::unranked(
            run.id,
            model_id,
            MetricsScope::Category(TestCategory::Qa),
            0.8,
            120.0,
            0.004,
            200,
            1.0,
        ),
        PerformanceMetrics::unranked(run.id, model_id, MetricsScope::Overall, 0.8, 120.0, 0.004, 200, 1.0),
    ];
    repo.save_metrics(batch).await.unwrap();

    let fetched = repo.get_metrics(run.id).await.unwrap();
    assert_eq!(fetched.len(), 2);
    assert_eq!(fetched[0].scope, MetricsScope::Category(TestCategory::Qa));
    assert_eq!(fetched[1].scope, MetricsScope::Overall);
}

#[tokio::test]
async fn test_seed_default_catalog() {
    let repo = InMemoryEvaluationRepository::new();
    seed_default_catalog(&repo).await.unwrap();

    assert_eq!(repo.list_active_models().await.unwrap().len(), 4);
    assert_eq!(repo.get_test_cases(None, None).await.unwrap().len(), 5);

    // Seeding twice violates the unique model-name rule
    assert!(seed_default_catalog(&repo).await.is_err());
}
