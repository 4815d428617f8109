//! CLI command implementations.

mod cases;
mod models;
mod run;
mod serve;

pub use cases::cases;
pub use models::models;
pub use run::{run, RunArgs};
pub use serve::{serve, ServeArgs};

use anyhow::Result;
use llm_eval_infrastructure::{seed_default_catalog, InMemoryEvaluationRepository};
use std::sync::Arc;

/// An in-memory repository seeded with the default catalog.
pub async fn seeded_repository() -> Result<Arc<InMemoryEvaluationRepository>> {
    let repository = Arc::new(InMemoryEvaluationRepository::new());
    seed_default_catalog(repository.as_ref()).await?;
    Ok(repository)
}
