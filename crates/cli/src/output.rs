//! Table rendering for CLI output.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use llm_eval_domain::{
    identifiers::ModelId,
    metrics::PerformanceMetrics,
    model::ModelSpec,
    run::RunStatus,
    test_case::TestCase,
};
use std::collections::HashMap;

fn base_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

/// Table of model catalog entries.
pub fn models_table(models: &[ModelSpec]) -> Table {
    let mut table = base_table(vec![
        "Name",
        "Provider",
        "Model ID",
        "$/1k tokens",
        "Max tokens",
        "Active",
    ]);
    for model in models {
        table.add_row(vec![
            Cell::new(&model.name),
            Cell::new(&model.provider_type),
            Cell::new(&model.model_id),
            Cell::new(format!("{:.4}", model.cost_per_1k_tokens)),
            Cell::new(model.max_tokens),
            Cell::new(if model.is_active { "yes" } else { "no" }),
        ]);
    }
    table
}

/// Table of test cases.
pub fn cases_table(cases: &[TestCase]) -> Table {
    let mut table = base_table(vec!["Name", "Category", "Difficulty", "Has expected output"]);
    for case in cases {
        table.add_row(vec![
            Cell::new(&case.name),
            Cell::new(case.category),
            Cell::new(format!("{:?}", case.difficulty_level).to_lowercase()),
            Cell::new(if case.expected_output.is_some() {
                "yes"
            } else {
                "no"
            }),
        ]);
    }
    table
}

/// Table of ranked metrics rows, grouped as given.
pub fn metrics_table(
    metrics: &[PerformanceMetrics],
    model_names: &HashMap<ModelId, String>,
) -> Table {
    let mut table = base_table(vec![
        "Model",
        "Scope",
        "Avg accuracy",
        "Avg latency (ms)",
        "Total cost ($)",
        "Success rate",
        "Acc#",
        "Spd#",
        "Cost#",
        "Overall#",
    ]);
    for row in metrics {
        let name = model_names
            .get(&row.model_id)
            .cloned()
            .unwrap_or_else(|| row.model_id.to_string());
        table.add_row(vec![
            Cell::new(name),
            Cell::new(row.scope),
            Cell::new(format!("{:.3}", row.avg_accuracy)),
            Cell::new(format!("{:.1}", row.avg_response_time)),
            Cell::new(format!("{:.6}", row.total_cost)),
            Cell::new(format!("{:.0}%", row.success_rate * 100.0)),
            Cell::new(row.accuracy_rank),
            Cell::new(row.speed_rank),
            Cell::new(row.cost_rank),
            Cell::new(row.overall_rank),
        ]);
    }
    table
}

/// Colorized run-status label.
pub fn status_label(status: RunStatus) -> String {
    match status {
        RunStatus::Running => status.to_string().yellow().to_string(),
        RunStatus::Completed => status.to_string().green().to_string(),
        RunStatus::Failed => status.to_string().red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm_eval_domain::test_case::TestCategory;

    #[test]
    fn test_models_table_renders_all_rows() {
        let models = vec![
            ModelSpec::new("GPT-4", "openai", "gpt-4", 0.03, 8192),
            ModelSpec::new("Mock", "mock", "mock-model", 0.001, 2048),
        ];
        let rendered = models_table(&models).to_string();
        assert!(rendered.contains("GPT-4"));
        assert!(rendered.contains("mock-model"));
    }

    #[test]
    fn test_cases_table_shows_category() {
        let cases = vec![TestCase::new("Logic Puzzle", TestCategory::Reasoning, "If A then B")];
        let rendered = cases_table(&cases).to_string();
        assert!(rendered.contains("reasoning"));
    }
}
