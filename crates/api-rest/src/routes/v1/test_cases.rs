//! Test-case catalog endpoints.

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use llm_eval_domain::test_case::{DifficultyLevel, TestCase, TestCategory};
use serde::{Deserialize, Serialize};

/// Test case list item
#[derive(Debug, Serialize, Deserialize)]
pub struct TestCaseResponse {
    pub id: String,
    pub name: String,
    pub category: TestCategory,
    pub difficulty_level: DifficultyLevel,
}

impl From<TestCase> for TestCaseResponse {
    fn from(case: TestCase) -> Self {
        Self {
            id: case.id.to_string(),
            name: case.name,
            category: case.category,
            difficulty_level: case.difficulty_level,
        }
    }
}

/// Query parameters for test-case listing
#[derive(Debug, Deserialize)]
pub struct TestCaseQuery {
    /// Restrict to a single category
    pub category: Option<String>,
}

/// Test-case routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/test-cases", get(list_test_cases))
        .route("/categories", get(list_categories))
}

/// Get all test cases, optionally filtered by category
async fn list_test_cases(
    State(state): State<AppState>,
    Query(query): Query<TestCaseQuery>,
) -> ApiResult<Json<Vec<TestCaseResponse>>> {
    let categories = match query.category.as_deref() {
        Some(raw) => Some(vec![raw
            .parse::<TestCategory>()
            .map_err(|err| ApiError::BadRequest(err.to_string()))?]),
        None => None,
    };

    let cases = state
        .repository
        .get_test_cases(None, categories.as_deref())
        .await?;
    Ok(Json(cases.into_iter().map(TestCaseResponse::from).collect()))
}

/// Get the distinct categories present in the catalog
async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<TestCategory>>> {
    let cases = state.repository.get_test_cases(None, None).await?;
    let mut categories: Vec<TestCategory> = Vec::new();
    for case in cases {
        if !categories.contains(&case.category) {
            categories.push(case.category);
        }
    }
    Ok(Json(categories))
}
