//! `cases` command: list the test-case catalog.

use super::seeded_repository;
use crate::output::cases_table;
use anyhow::{anyhow, Result};
use llm_eval_application::EvaluationRepository;
use llm_eval_domain::test_case::TestCategory;

pub async fn cases(category: Option<String>) -> Result<()> {
    let repository = seeded_repository().await?;

    let categories = match category.as_deref() {
        Some(raw) => Some(vec![raw
            .parse::<TestCategory>()
            .map_err(|err| anyhow!(err))?]),
        None => None,
    };

    let cases = repository.get_test_cases(None, categories.as_deref()).await?;
    println!("{}", cases_table(&cases));
    Ok(())
}
