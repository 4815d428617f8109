//! `run` command: execute a blocking evaluation and print rankings.

use super::seeded_repository;
use crate::output::{metrics_table, status_label};
use anyhow::{anyhow, Result};
use clap::Args;
use llm_eval_application::{
    EvaluationContext, EvaluationOrchestrator, EvaluationRepository, EvaluationRequest,
};
use llm_eval_domain::{identifiers::ModelId, test_case::TestCategory};
use std::sync::Arc;

/// Arguments for the `run` command.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Name recorded on the evaluation run
    #[arg(short, long, default_value = "CLI Evaluation")]
    pub name: String,

    /// Comma-separated model names to evaluate (default: all active models)
    #[arg(short, long, value_delimiter = ',')]
    pub models: Option<Vec<String>>,

    /// Comma-separated categories to restrict to
    #[arg(short, long, value_delimiter = ',')]
    pub categories: Option<Vec<TestCategory>>,
}

pub async fn run(args: RunArgs) -> Result<()> {
    let repository = seeded_repository().await?;
    let catalog = repository.list_active_models().await?;

    let model_ids: Vec<ModelId> = match &args.models {
        Some(names) => names
            .iter()
            .map(|name| {
                catalog
                    .iter()
                    .find(|model| model.name.eq_ignore_ascii_case(name.trim()))
                    .map(|model| model.id)
                    .ok_or_else(|| anyhow!("Unknown model: {name}"))
            })
            .collect::<Result<_>>()?,
        None => catalog.iter().map(|model| model.id).collect(),
    };

    let orchestrator = EvaluationOrchestrator::new(
        Arc::clone(&repository) as Arc<dyn EvaluationRepository>,
        Arc::new(EvaluationContext::with_defaults()),
    );

    let request = EvaluationRequest {
        name: args.name,
        model_ids,
        test_case_ids: None,
        categories: args.categories,
    };

    let summary = orchestrator.run_evaluation(request).await?;
    println!(
        "Run {} finished with status {} ({} results over {} models x {} test cases)\n",
        summary.run_id,
        status_label(summary.status),
        summary.total_results,
        summary.models_evaluated,
        summary.test_cases_run,
    );

    let model_names = repository.model_names();
    let metrics = repository.get_metrics(summary.run_id).await?;

    // Per-category tables first, the overall rollup last
    let mut scopes: Vec<_> = Vec::new();
    for row in &metrics {
        if !scopes.contains(&row.scope) {
            scopes.push(row.scope);
        }
    }
    scopes.sort_by_key(|scope| scope.as_str() == "overall");

    for scope in scopes {
        let rows: Vec<_> = metrics
            .iter()
            .filter(|row| row.scope == scope)
            .cloned()
            .collect();
        println!("{}", scope.as_str());
        println!("{}", metrics_table(&rows, &model_names));
    }

    Ok(())
}
