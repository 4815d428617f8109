//! Test case types and categories.

use crate::identifiers::TestCaseId;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use validator::Validate;

/// Category of a test case, determining which scorer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCategory {
    /// Text summarization tasks
    Summarization,
    /// Question answering tasks
    Qa,
    /// Logical reasoning tasks
    Reasoning,
}

impl TestCategory {
    /// All known categories, in declaration order.
    pub const ALL: [TestCategory; 3] = [
        TestCategory::Summarization,
        TestCategory::Qa,
        TestCategory::Reasoning,
    ];

    /// The snake_case string form used in storage and APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestCategory::Summarization => "summarization",
            TestCategory::Qa => "qa",
            TestCategory::Reasoning => "reasoning",
        }
    }
}

impl Display for TestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TestCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summarization" => Ok(TestCategory::Summarization),
            "qa" => Ok(TestCategory::Qa),
            "reasoning" => Ok(TestCategory::Reasoning),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized category string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown test category: {0}")]
pub struct UnknownCategory(
    /// The unrecognized input
    pub String,
);

/// Difficulty classification for a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    /// Straightforward cases
    Easy,
    /// Default difficulty
    #[default]
    Medium,
    /// Cases requiring careful handling
    Hard,
}

/// An individual test case, immutable during a run.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TestCase {
    /// Catalog identifier
    pub id: TestCaseId,
    /// Human-readable name
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Category determining the scorer
    pub category: TestCategory,
    /// Prompt text sent to the provider
    #[validate(length(min = 1))]
    pub input_text: String,
    /// Reference answer, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
    /// Free-form description of what a good answer looks like
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_criteria: Option<String>,
    /// Difficulty classification
    pub difficulty_level: DifficultyLevel,
}

impl TestCase {
    /// Create a test case with a fresh id and medium difficulty.
    pub fn new(
        name: impl Into<String>,
        category: TestCategory,
        input_text: impl Into<String>,
    ) -> Self {
        Self {
            id: TestCaseId::new(),
            name: name.into(),
            category,
            input_text: input_text.into(),
            expected_output: None,
            evaluation_criteria: None,
            difficulty_level: DifficultyLevel::default(),
        }
    }

    /// Attach a reference answer.
    pub fn with_expected_output(mut self, expected: impl Into<String>) -> Self {
        self.expected_output = Some(expected.into());
        self
    }

    /// Attach evaluation criteria text.
    pub fn with_criteria(mut self, criteria: impl Into<String>) -> Self {
        self.evaluation_criteria = Some(criteria.into());
        self
    }

    /// Set the difficulty classification.
    pub fn with_difficulty(mut self, level: DifficultyLevel) -> Self {
        self.difficulty_level = level;
        self
    }
}
