//! Testing utilities for the LLM Evaluation Framework
//!
//! This crate provides:
//! - Test fixtures for domain types
//! - Builder patterns for complex test data construction
//! - Scripted and failing provider/scorer implementations for exercising
//!   orchestration paths deterministically
//!
//! # Examples
//!
//! ```
//! use llm_eval_testing::{builders::*, fixtures::*};
//! use llm_eval_domain::test_case::TestCategory;
//!
//! // Create a test model
//! let model = create_test_model("mock");
//!
//! // Build a custom test case
//! let case = TestCaseBuilder::new(TestCategory::Qa)
//!     .with_name("Capital city")
//!     .with_expected_output("Canberra")
//!     .build();
//! ```

pub mod builders;
pub mod fixtures;
pub mod mocks;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;
pub use mocks::*;

// Re-export testing dependencies for convenience
pub use fake;
