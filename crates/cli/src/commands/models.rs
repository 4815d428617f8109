//! `models` command: list the model catalog.

use super::seeded_repository;
use crate::output::models_table;
use anyhow::Result;
use llm_eval_application::EvaluationRepository;

pub async fn models() -> Result<()> {
    let repository = seeded_repository().await?;
    let models = repository.list_active_models().await?;
    println!("{}", models_table(&models));
    Ok(())
}
