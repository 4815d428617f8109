//! LLM Evaluation Framework Domain Types
//!
//! This crate provides the core domain model for the LLM Evaluation
//! Framework. It defines the entities that flow through an evaluation run
//! (models, test cases, results, aggregated metrics) as strongly-typed
//! Rust structures with serialization support.
//!
//! ## Architecture
//!
//! The domain layer is organized into the following modules:
//!
//! - **identifiers**: Strongly-typed UUID-based identifiers for all entities
//! - **model**: LLM model catalog entries and cost configuration
//! - **test_case**: Test case specifications and categories
//! - **run**: Evaluation run lifecycle and status transitions
//! - **result**: Per-pair evaluation result rows
//! - **metrics**: Aggregated performance metrics and rankings
//! - **errors**: Evaluation error taxonomy with HTTP status codes
//!
//! ## Usage
//!
//! ```rust
//! use llm_eval_domain::{
//!     identifiers::RunId,
//!     run::RunStatus,
//!     test_case::TestCategory,
//! };
//!
//! // Create a new run ID
//! let id = RunId::new();
//!
//! // Parse a category
//! let category: TestCategory = "summarization".parse().unwrap();
//! assert_eq!(category.as_str(), "summarization");
//!
//! // Status transitions
//! assert!(RunStatus::Running.can_transition_to(RunStatus::Completed));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core domain modules
pub mod errors;
pub mod identifiers;
pub mod metrics;
pub mod model;
pub mod result;
pub mod run;
pub mod test_case;

// Re-export commonly used types
pub use errors::{EvalError, EvalResult};
pub use identifiers::*;

// Re-export key domain types
pub use metrics::{MetricsScope, PerformanceMetrics};
pub use model::ModelSpec;
pub use result::EvaluationResult;
pub use run::{EvaluationRun, RunStatus};
pub use test_case::{DifficultyLevel, TestCase, TestCategory};
