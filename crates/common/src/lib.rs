//! Common utilities shared across the LLM Evaluation Framework crates.
//!
//! This crate provides foundational concerns used by the binaries:
//! - Telemetry and structured logging setup

pub mod telemetry;

// Re-export commonly used helpers
pub use telemetry::init_tracing;

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
