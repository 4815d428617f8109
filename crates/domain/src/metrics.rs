//! Aggregated performance metrics and ranking types.

use crate::identifiers::{MetricsId, ModelId, RunId};
use crate::test_case::TestCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display};

/// Scope of an aggregated metrics row.
///
/// Each run produces one row per (model, category) plus one `Overall` row
/// per model rolling up across all of its categories. Ranking always
/// compares rows of the same scope only.
///
/// Serializes as the plain category label, with `"overall"` for the rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricsScope {
    /// Per-category statistics
    Category(TestCategory),
    /// Cross-category rollup for one model
    Overall,
}

impl MetricsScope {
    /// The string label used in storage and APIs ("overall" for the rollup).
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricsScope::Category(category) => category.as_str(),
            MetricsScope::Overall => "overall",
        }
    }
}

impl Serialize for MetricsScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MetricsScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        if label == "overall" {
            return Ok(MetricsScope::Overall);
        }
        label
            .parse::<TestCategory>()
            .map(MetricsScope::Category)
            .map_err(serde::de::Error::custom)
    }
}

impl Display for MetricsScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TestCategory> for MetricsScope {
    fn from(category: TestCategory) -> Self {
        MetricsScope::Category(category)
    }
}

/// Aggregated statistics and rankings for one (run, model, scope) group.
///
/// Rows are created once per run after all results are in and never mutated
/// afterwards. Rank fields are 1-based and form a permutation of 1..=N
/// within each (run, scope) group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Row identifier
    pub id: MetricsId,
    /// Run the statistics belong to
    pub run_id: RunId,
    /// Model the statistics describe
    pub model_id: ModelId,
    /// Category or overall rollup
    pub scope: MetricsScope,
    /// Mean score over successful results (0.0 if none)
    pub avg_accuracy: f64,
    /// Mean latency in ms over successful results (0.0 if none)
    pub avg_response_time: f64,
    /// Summed cost in USD over successful results
    pub total_cost: f64,
    /// Summed token usage over successful results
    pub total_tokens: u64,
    /// success_count / total_count for the group
    pub success_rate: f64,
    /// 1 = highest average accuracy in the scope group
    pub accuracy_rank: u32,
    /// 1 = lowest average response time in the scope group
    pub speed_rank: u32,
    /// 1 = lowest total cost in the scope group
    pub cost_rank: u32,
    /// 1 = best weighted combination of the other three ranks
    pub overall_rank: u32,
    /// Persistence timestamp
    pub created_at: DateTime<Utc>,
}

impl PerformanceMetrics {
    /// Create an unranked row; rank fields are assigned by the aggregator
    /// before the batch is persisted.
    #[allow(clippy::too_many_arguments)]
    pub fn unranked(
        run_id: RunId,
        model_id: ModelId,
        scope: MetricsScope,
        avg_accuracy: f64,
        avg_response_time: f64,
        total_cost: f64,
        total_tokens: u64,
        success_rate: f64,
    ) -> Self {
        Self {
            id: MetricsId::new(),
            run_id,
            model_id,
            scope,
            avg_accuracy,
            avg_response_time,
            total_cost,
            total_tokens,
            success_rate,
            accuracy_rank: 0,
            speed_rank: 0,
            cost_rank: 0,
            overall_rank: 0,
            created_at: Utc::now(),
        }
    }
}
