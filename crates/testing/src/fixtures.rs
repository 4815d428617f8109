//! Test fixtures for domain types.

use fake::faker::lorem::en::Words;
use fake::Fake;
use llm_eval_domain::{
    model::ModelSpec,
    test_case::{TestCase, TestCategory},
};
use uuid::Uuid;

/// An active model for the given provider type with a unique name.
pub fn create_test_model(provider_type: &str) -> ModelSpec {
    let suffix = Uuid::now_v7().simple().to_string();
    ModelSpec::new(
        format!("test-model-{}", &suffix[..8]),
        provider_type,
        format!("{provider_type}-model"),
        0.001,
        2048,
    )
}

/// An active model with an explicit per-1k-token rate.
pub fn create_test_model_with_cost(provider_type: &str, cost_per_1k_tokens: f64) -> ModelSpec {
    let mut model = create_test_model(provider_type);
    model.cost_per_1k_tokens = cost_per_1k_tokens;
    model
}

/// A test case in the given category with generated input text.
pub fn create_test_case(category: TestCategory) -> TestCase {
    let words: Vec<String> = Words(20..40).fake();
    let input_text = match category {
        TestCategory::Summarization => format!("Summarize this text: {}", words.join(" ")),
        TestCategory::Qa => format!("What can be said about {}?", words.join(" ")),
        TestCategory::Reasoning => format!("Using logic, conclude from: {}", words.join(" ")),
    };

    let suffix = Uuid::now_v7().simple().to_string();
    TestCase::new(format!("test-case-{}", &suffix[..8]), category, input_text)
}

/// A QA case with a reference answer.
pub fn create_qa_case_with_expected(expected: &str) -> TestCase {
    create_test_case(TestCategory::Qa).with_expected_output(expected)
}
