//! Error types for the LLM Evaluation Framework domain.
//!
//! This module defines the evaluation error taxonomy, providing structured
//! error information with HTTP status codes and error codes for API
//! responses.
//!
//! Failures inside a single (model, test case) pair are *not* represented
//! here; they are absorbed into [`crate::result::EvaluationResult`] rows
//! with `error_message` set. `EvalError` covers everything that surfaces to
//! a caller: input validation, lookup failures, and run-fatal errors.

use crate::identifiers::RunId;
use crate::test_case::TestCategory;

/// Top-level evaluation error type
///
/// This enum encompasses all error conditions that can surface from the
/// orchestration core to its callers.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// None of the requested models are active
    #[error("No active models found for evaluation")]
    NoActiveModels,

    /// The requested filters matched no test cases
    #[error("No test cases found for evaluation")]
    NoTestCases,

    /// A model references a provider type with no registered implementation
    #[error("Unknown provider type: {0}")]
    UnknownProvider(String),

    /// No scorer is registered for a test case's category
    #[error("No scorer registered for category: {0}")]
    NoScorerForCategory(TestCategory),

    /// The requested run does not exist
    #[error("Evaluation run not found: {0}")]
    RunNotFound(RunId),

    /// A completion provider failed
    #[error("Provider failure: {0}")]
    Provider(String),

    /// Computing or persisting metrics failed; fatal to the run
    #[error("Aggregation failure: {0}")]
    Aggregation(String),

    /// Repository operation failed
    #[error("Repository failure: {0}")]
    Repository(String),

    /// Unexpected internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EvalError {
    /// Get the error code for this error
    ///
    /// Error codes are used in API responses for programmatic error handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoActiveModels => "NO_ACTIVE_MODELS",
            Self::NoTestCases => "NO_TEST_CASES",
            Self::UnknownProvider(_) => "UNKNOWN_PROVIDER",
            Self::NoScorerForCategory(_) => "NO_SCORER_FOR_CATEGORY",
            Self::RunNotFound(_) => "RUN_NOT_FOUND",
            Self::Provider(_) => "PROVIDER_FAILURE",
            Self::Aggregation(_) => "AGGREGATION_FAILURE",
            Self::Repository(_) => "REPOSITORY_FAILURE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            Self::NoActiveModels | Self::NoTestCases => 400,
            Self::RunNotFound(_) => 404,
            _ => 500,
        }
    }

    /// Whether the error is an input-validation failure, surfaced before
    /// any run row is created.
    pub fn is_input_validation(&self) -> bool {
        matches!(self, Self::NoActiveModels | Self::NoTestCases)
    }
}

/// Result type used throughout the evaluation core
pub type EvalResult<T> = Result<T, EvalError>;
