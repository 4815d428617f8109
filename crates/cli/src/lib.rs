//! LLM Evaluation Framework CLI
//!
//! In-process command implementations: the CLI seeds an in-memory catalog,
//! drives the evaluation core directly, and renders results as tables.

pub mod commands;
pub mod output;
