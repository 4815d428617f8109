//! Version 1 API routes.

pub mod evaluations;
pub mod models;
pub mod test_cases;

use crate::state::AppState;
use axum::Router;

/// All v1 routes, nested under `/api/v1` by the app builder.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(models::routes())
        .merge(test_cases::routes())
        .merge(evaluations::routes())
}
