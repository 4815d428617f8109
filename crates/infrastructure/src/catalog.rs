//! Default catalog seed data.
//!
//! Registers the sample models and test cases the bundled binaries start
//! with, mirroring what a deployment would load from its model registry.

use llm_eval_application::repository::EvaluationRepository;
use llm_eval_domain::{
    model::ModelSpec,
    test_case::{DifficultyLevel, TestCase, TestCategory},
    EvalResult,
};
use tracing::info;

/// Seed the repository with the default models and test cases.
///
/// Idempotence is the caller's concern; this is intended for empty stores.
pub async fn seed_default_catalog(repository: &dyn EvaluationRepository) -> EvalResult<()> {
    for model in default_models() {
        repository.add_model(model).await?;
    }
    for case in default_test_cases() {
        repository.add_test_case(case).await?;
    }
    info!("Seeded default model and test-case catalog");
    Ok(())
}

/// The default model catalog.
pub fn default_models() -> Vec<ModelSpec> {
    vec![
        ModelSpec::new("GPT-4", "openai", "gpt-4", 0.03, 8192),
        ModelSpec::new("GPT-3.5 Turbo", "openai", "gpt-3.5-turbo", 0.002, 4096),
        ModelSpec::new(
            "Claude 3 Sonnet",
            "anthropic",
            "claude-3-sonnet-20240229",
            0.015,
            4096,
        ),
        ModelSpec::new("Mock Model", "mock", "mock-model", 0.001, 2048),
    ]
}

/// The default test-case catalog.
pub fn default_test_cases() -> Vec<TestCase> {
    vec![
        TestCase::new(
            "News Article Summary",
            TestCategory::Summarization,
            "The global technology sector experienced significant volatility in 2023, with \
             artificial intelligence companies seeing unprecedented growth while traditional \
             software companies faced headwinds. Major tech giants like Microsoft, Google, and \
             OpenAI made substantial investments in AI infrastructure, leading to a new wave of \
             innovation but also raising concerns about market concentration. Meanwhile, \
             regulatory bodies worldwide began implementing stricter guidelines for AI \
             development and deployment, particularly focusing on data privacy and algorithmic \
             bias. The semiconductor industry, crucial for AI development, faced supply chain \
             challenges but also benefited from increased demand for specialized AI chips.",
        )
        .with_expected_output(
            "Tech sector showed mixed results in 2023: AI companies grew rapidly with major \
             investments from Microsoft, Google, and OpenAI, while traditional software \
             struggled. New regulations emerged focusing on AI privacy and bias, and \
             semiconductor industry faced supply challenges despite increased AI chip demand.",
        )
        .with_criteria("Accuracy, conciseness, key point coverage")
        .with_difficulty(DifficultyLevel::Medium),
        TestCase::new(
            "Factual Question",
            TestCategory::Qa,
            "What is the capital of Australia and what is its population approximately?",
        )
        .with_expected_output(
            "The capital of Australia is Canberra, with a population of approximately \
             430,000-450,000 people.",
        )
        .with_criteria("Factual accuracy, completeness")
        .with_difficulty(DifficultyLevel::Easy),
        TestCase::new(
            "Logic Puzzle",
            TestCategory::Reasoning,
            "If all roses are flowers, and all flowers need water, and some roses are red, can \
             we conclude that some red things need water?",
        )
        .with_expected_output(
            "Yes, we can conclude that some red things need water. Since some roses are red, \
             and all roses are flowers, those red roses are flowers. Since all flowers need \
             water, those red roses (which are red things) need water.",
        )
        .with_criteria("Logical reasoning, step-by-step explanation")
        .with_difficulty(DifficultyLevel::Medium),
        TestCase::new(
            "Complex Summarization",
            TestCategory::Summarization,
            "Climate change research published in 2023 revealed accelerating trends in global \
             temperature rise, with the past decade marking the warmest on record. Scientists \
             from over 50 countries collaborated on comprehensive studies showing that carbon \
             dioxide levels have reached 421 ppm, the highest in human history. The research \
             highlighted regional variations, with Arctic regions warming twice as fast as the \
             global average, leading to accelerated ice sheet melting and sea level rise. \
             Economic impacts were quantified at $23 trillion globally by 2050 if current \
             trends continue. However, the studies also identified promising developments in \
             renewable energy adoption, with solar and wind power costs declining by 60% since \
             2020. Policy recommendations included immediate implementation of carbon pricing \
             mechanisms and increased investment in climate adaptation infrastructure.",
        )
        .with_expected_output(
            "2023 climate research shows record warming with CO2 at historic high of 421 ppm. \
             Arctic warming twice the global rate, causing ice melt and sea rise. Economic \
             damage projected at $23 trillion by 2050, but renewable energy costs dropped 60% \
             since 2020. Scientists recommend carbon pricing and adaptation infrastructure \
             investment.",
        )
        .with_criteria("Accuracy, completeness, conciseness")
        .with_difficulty(DifficultyLevel::Hard),
        TestCase::new(
            "Mathematical Reasoning",
            TestCategory::Reasoning,
            "A company's revenue increased by 25% in the first quarter, then decreased by 20% \
             in the second quarter. If the revenue at the end of the second quarter was \
             $300,000, what was the original revenue at the start of the first quarter?",
        )
        .with_expected_output(
            "Let's work backwards. If Q2 revenue is $300,000 after a 20% decrease, then Q1 \
             revenue was $300,000 / 0.8 = $375,000. If Q1 revenue of $375,000 represents a 25% \
             increase from the original, then the original revenue was $375,000 / 1.25 = \
             $300,000.",
        )
        .with_criteria("Mathematical accuracy, step-by-step reasoning")
        .with_difficulty(DifficultyLevel::Medium),
    ]
}
