//! Metrics aggregation and multi-criteria ranking.
//!
//! After every pair of a run has been attempted, the aggregator partitions
//! the run's results into (model, category) groups plus one overall rollup
//! per model, computes per-group statistics, assigns four independent
//! rankings within each scope group, and persists the whole batch in one
//! write.

use crate::repository::EvaluationRepository;
use indexmap::IndexMap;
use llm_eval_domain::{
    identifiers::RunId,
    metrics::{MetricsScope, PerformanceMetrics},
    model::ModelSpec,
    result::EvaluationResult,
    test_case::TestCategory,
    EvalError, EvalResult,
};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Weight of the accuracy rank in the overall score.
const ACCURACY_WEIGHT: f64 = 0.5;
/// Weight of the speed rank in the overall score.
const SPEED_WEIGHT: f64 = 0.25;
/// Weight of the cost rank in the overall score.
const COST_WEIGHT: f64 = 0.25;

/// Accumulates one group's statistics.
///
/// Every result counts toward `total_count`; only successful results feed
/// the score/latency/cost/token accumulators and `success_count`.
#[derive(Debug, Default)]
struct GroupAccumulator {
    scores: Vec<f64>,
    response_times: Vec<f64>,
    costs: Vec<f64>,
    tokens: Vec<u64>,
    success_count: u64,
    total_count: u64,
}

impl GroupAccumulator {
    fn push(&mut self, result: &EvaluationResult) {
        self.total_count += 1;
        if result.is_success() {
            self.success_count += 1;
            self.scores.push(result.accuracy_score);
            self.response_times.push(result.response_time_ms);
            self.costs.push(result.cost_usd);
            self.tokens.push(result.tokens_used as u64);
        }
    }

    fn into_metrics(self, run_id: RunId, model_id: llm_eval_domain::ModelId, scope: MetricsScope) -> PerformanceMetrics {
        PerformanceMetrics::unranked(
            run_id,
            model_id,
            scope,
            mean(&self.scores),
            mean(&self.response_times),
            self.costs.iter().sum(),
            self.tokens.iter().sum(),
            self.success_count as f64 / self.total_count as f64,
        )
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes and persists [`PerformanceMetrics`] for completed runs.
#[derive(Clone)]
pub struct MetricsAggregator {
    repository: Arc<dyn EvaluationRepository>,
}

impl MetricsAggregator {
    /// Create an aggregator over the given repository.
    pub fn new(repository: Arc<dyn EvaluationRepository>) -> Self {
        Self { repository }
    }

    /// Aggregate a run's results into ranked metrics rows and persist them
    /// as one batch. Returns the persisted rows.
    ///
    /// `models` is the run's resolved model set; rows are emitted in that
    /// order, which is also the documented tie-break order for rankings.
    /// Any failure here is fatal to the run: no partial metrics are ever
    /// persisted.
    #[instrument(skip(self, models), fields(run_id = %run_id))]
    pub async fn aggregate(
        &self,
        run_id: RunId,
        models: &[ModelSpec],
    ) -> EvalResult<Vec<PerformanceMetrics>> {
        let results = self
            .repository
            .get_results(run_id)
            .await
            .map_err(|e| EvalError::Aggregation(e.to_string()))?;

        let mut rows = self.build_rows(run_id, models, &results);
        assign_rankings(&mut rows);

        self.repository
            .save_metrics(rows.clone())
            .await
            .map_err(|e| EvalError::Aggregation(e.to_string()))?;

        info!(rows = rows.len(), "Performance metrics persisted");
        Ok(rows)
    }

    /// Group results and compute unranked statistics rows.
    fn build_rows(
        &self,
        run_id: RunId,
        models: &[ModelSpec],
        results: &[EvaluationResult],
    ) -> Vec<PerformanceMetrics> {
        let mut rows = Vec::new();

        for model in models {
            let model_results: Vec<&EvaluationResult> = results
                .iter()
                .filter(|r| r.model_id == model.id)
                .collect();
            if model_results.is_empty() {
                debug!(model = %model.name, "No results for model; skipping");
                continue;
            }

            // Per-category groups in first-seen order
            let mut groups: IndexMap<TestCategory, GroupAccumulator> = IndexMap::new();
            for result in &model_results {
                groups.entry(result.category).or_default().push(result);
            }
            for (category, group) in groups {
                rows.push(group.into_metrics(run_id, model.id, category.into()));
            }

            // Overall rollup: a fresh accumulation over the model's full
            // result set, not an average of the per-category averages.
            let mut overall = GroupAccumulator::default();
            for result in &model_results {
                overall.push(result);
            }
            rows.push(overall.into_metrics(run_id, model.id, MetricsScope::Overall));
        }

        rows
    }
}

/// Assign the four rank fields within each scope group.
///
/// Rankings are computed independently per scope: models are only compared
/// against other models sharing the same category label (or `overall`).
/// All sorts are stable, so exact ties keep row insertion order: the model
/// listed first in the run's resolved model set wins the tie.
pub fn assign_rankings(rows: &mut [PerformanceMetrics]) {
    let mut scopes: IndexMap<MetricsScope, Vec<usize>> = IndexMap::new();
    for (index, row) in rows.iter().enumerate() {
        scopes.entry(row.scope).or_default().push(index);
    }

    for indices in scopes.values() {
        let group_size = indices.len() as u32;

        // Accuracy: higher is better
        let mut by_accuracy = indices.clone();
        by_accuracy.sort_by(|&a, &b| descending(rows[a].avg_accuracy, rows[b].avg_accuracy));
        for (position, &index) in by_accuracy.iter().enumerate() {
            rows[index].accuracy_rank = position as u32 + 1;
        }

        // Speed: lower response time is better
        let mut by_speed = indices.clone();
        by_speed.sort_by(|&a, &b| ascending(rows[a].avg_response_time, rows[b].avg_response_time));
        for (position, &index) in by_speed.iter().enumerate() {
            rows[index].speed_rank = position as u32 + 1;
        }

        // Cost: cheaper is better
        let mut by_cost = indices.clone();
        by_cost.sort_by(|&a, &b| ascending(rows[a].total_cost, rows[b].total_cost));
        for (position, &index) in by_cost.iter().enumerate() {
            rows[index].cost_rank = position as u32 + 1;
        }

        // Overall: weighted points over the three ranks, re-ranked by
        // descending points. The points value itself is never persisted.
        let mut by_points: Vec<(usize, f64)> = indices
            .iter()
            .map(|&index| {
                let row = &rows[index];
                let points = (group_size - row.accuracy_rank + 1) as f64 * ACCURACY_WEIGHT
                    + (group_size - row.speed_rank + 1) as f64 * SPEED_WEIGHT
                    + (group_size - row.cost_rank + 1) as f64 * COST_WEIGHT;
                (index, points)
            })
            .collect();
        by_points.sort_by(|a, b| descending(a.1, b.1));
        for (position, (index, _)) in by_points.iter().enumerate() {
            rows[*index].overall_rank = position as u32 + 1;
        }
    }
}

fn ascending(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
