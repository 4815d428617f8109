//! REST trigger surface for the LLM Evaluation Framework.
//!
//! A thin Axum layer over the evaluation core: it maps HTTP requests onto
//! orchestrator calls and evaluation errors onto status codes. No wire
//! format beyond JSON is mandated by the core; this crate is one possible
//! front.

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
