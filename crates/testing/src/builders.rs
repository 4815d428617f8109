//! Fluent builders for constructing test data.

use chrono::Utc;
use llm_eval_domain::{
    identifiers::{ModelId, ResultId, RunId, TestCaseId},
    model::ModelSpec,
    result::EvaluationResult,
    test_case::{DifficultyLevel, TestCase, TestCategory},
};

/// Builder for [`ModelSpec`] test instances.
#[derive(Clone)]
pub struct ModelBuilder {
    name: String,
    provider_type: String,
    model_id: String,
    cost_per_1k_tokens: f64,
    max_tokens: u32,
    is_active: bool,
}

impl ModelBuilder {
    pub fn new(provider_type: impl Into<String>) -> Self {
        let provider_type = provider_type.into();
        Self {
            name: format!("{provider_type}-test-model"),
            model_id: format!("{provider_type}-model"),
            provider_type,
            cost_per_1k_tokens: 0.001,
            max_tokens: 2048,
            is_active: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_cost(mut self, cost_per_1k_tokens: f64) -> Self {
        self.cost_per_1k_tokens = cost_per_1k_tokens;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn build(self) -> ModelSpec {
        let mut model = ModelSpec::new(
            self.name,
            self.provider_type,
            self.model_id,
            self.cost_per_1k_tokens,
            self.max_tokens,
        );
        model.is_active = self.is_active;
        model
    }
}

/// Builder for [`TestCase`] test instances.
#[derive(Clone)]
pub struct TestCaseBuilder {
    name: String,
    category: TestCategory,
    input_text: String,
    expected_output: Option<String>,
    difficulty: DifficultyLevel,
}

impl TestCaseBuilder {
    pub fn new(category: TestCategory) -> Self {
        Self {
            name: format!("{category}-test-case"),
            category,
            input_text: match category {
                TestCategory::Summarization => {
                    "Summarize this longer passage about technology trends and their impact."
                        .to_string()
                }
                TestCategory::Qa => "What is the capital of Australia?".to_string(),
                TestCategory::Reasoning => {
                    "If all A are B and all B are C, conclude what follows for A.".to_string()
                }
            },
            expected_output: None,
            difficulty: DifficultyLevel::Medium,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input_text = input.into();
        self
    }

    pub fn with_expected_output(mut self, expected: impl Into<String>) -> Self {
        self.expected_output = Some(expected.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: DifficultyLevel) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn build(self) -> TestCase {
        let mut case = TestCase::new(self.name, self.category, self.input_text)
            .with_difficulty(self.difficulty);
        case.expected_output = self.expected_output;
        case
    }
}

/// Builder for [`EvaluationResult`] rows, defaulting to a successful row.
#[derive(Clone)]
pub struct ResultBuilder {
    run_id: RunId,
    model_id: ModelId,
    test_case_id: TestCaseId,
    category: TestCategory,
    accuracy_score: f64,
    response_time_ms: f64,
    tokens_used: u32,
    cost_usd: f64,
    error_message: Option<String>,
}

impl ResultBuilder {
    pub fn new(run_id: RunId, model_id: ModelId, category: TestCategory) -> Self {
        Self {
            run_id,
            model_id,
            test_case_id: TestCaseId::new(),
            category,
            accuracy_score: 0.8,
            response_time_ms: 100.0,
            tokens_used: 50,
            cost_usd: 0.0005,
            error_message: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.accuracy_score = score;
        self
    }

    pub fn with_latency(mut self, response_time_ms: f64) -> Self {
        self.response_time_ms = response_time_ms;
        self
    }

    pub fn with_tokens(mut self, tokens_used: u32) -> Self {
        self.tokens_used = tokens_used;
        self
    }

    pub fn with_cost(mut self, cost_usd: f64) -> Self {
        self.cost_usd = cost_usd;
        self
    }

    pub fn failed(mut self, error: impl Into<String>) -> Self {
        self.error_message = Some(error.into());
        self
    }

    pub fn build(self) -> EvaluationResult {
        if let Some(error) = self.error_message {
            return EvaluationResult::failed(
                self.run_id,
                self.model_id,
                self.test_case_id,
                self.category,
                error,
            );
        }

        EvaluationResult {
            id: ResultId::new(),
            run_id: self.run_id,
            model_id: self.model_id,
            test_case_id: self.test_case_id,
            category: self.category,
            model_output: "test output".to_string(),
            accuracy_score: self.accuracy_score,
            response_time_ms: self.response_time_ms,
            tokens_used: self.tokens_used,
            cost_usd: self.cost_usd,
            error_message: None,
            agent_feedback: Some("Score: 8.0\nFeedback: test".to_string()),
            created_at: Utc::now(),
        }
    }
}
