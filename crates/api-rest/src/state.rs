//! Application state and dependency injection.
//!
//! The shared state wires the in-memory repository, the default
//! provider/scorer registries, and the orchestrator together; handlers
//! receive it via Axum's state extraction.

use llm_eval_application::{EvaluationContext, EvaluationOrchestrator, EvaluationRepository};
use llm_eval_infrastructure::{seed_default_catalog, InMemoryEvaluationRepository};
use std::sync::Arc;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Storage port used by read-only catalog handlers
    pub repository: Arc<dyn EvaluationRepository>,

    /// Evaluation orchestrator driving runs
    pub orchestrator: Arc<EvaluationOrchestrator>,
}

impl AppState {
    /// State over an in-memory repository seeded with the default catalog.
    pub async fn with_default_catalog() -> anyhow::Result<Self> {
        let repository = Arc::new(InMemoryEvaluationRepository::new());
        seed_default_catalog(repository.as_ref()).await?;
        Ok(Self::over(repository))
    }

    /// State over an existing repository (used by tests and the CLI).
    pub fn over(repository: Arc<InMemoryEvaluationRepository>) -> Self {
        let repository: Arc<dyn EvaluationRepository> = repository;
        let orchestrator = Arc::new(EvaluationOrchestrator::new(
            Arc::clone(&repository),
            Arc::new(EvaluationContext::with_defaults()),
        ));
        Self {
            repository,
            orchestrator,
        }
    }
}
