//! Infrastructure adapters for the LLM Evaluation Framework.
//!
//! This crate provides concrete implementations of the storage port defined
//! in `llm-eval-application`:
//!
//! - `repositories::memory` - In-memory repository backed by `RwLock` maps,
//!   used by the bundled binaries and tests. A database-backed adapter
//!   would implement the same trait.
//! - `catalog` - Default model and test-case seed data.

pub mod catalog;
pub mod repositories;

pub use catalog::seed_default_catalog;
pub use repositories::memory::InMemoryEvaluationRepository;
