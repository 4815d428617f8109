//! Evaluation run lifecycle types.

use crate::identifiers::RunId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Lifecycle state of an evaluation run.
///
/// A run is created in `Running` state before any provider call is made, so
/// partial progress is observable. `Completed` and `Failed` are terminal;
/// a run is never re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Pairs are being evaluated or metrics are being computed
    Running,
    /// Every requested pair produced a result and metrics were persisted
    Completed,
    /// An unrecoverable error occurred before completion
    Failed,
}

impl RunStatus {
    /// Whether a transition to `target` is allowed.
    pub fn can_transition_to(&self, target: RunStatus) -> bool {
        matches!(
            (self, target),
            (RunStatus::Running, RunStatus::Completed) | (RunStatus::Running, RunStatus::Failed)
        )
    }

    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Failed)
    }

    /// The snake_case string form used in storage and APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Running => "running",
            RunStatus::Completed => "completed",
            RunStatus::Failed => "failed",
        }
    }
}

impl Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One invocation of the orchestrator over a resolved model/test-case matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRun {
    /// Run identifier
    pub id: RunId,
    /// Caller-supplied run name
    pub name: String,
    /// Short description, e.g. "Evaluation of 3 models"
    pub description: String,
    /// Current lifecycle state
    pub status: RunStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl EvaluationRun {
    /// Create a run in `Running` state with a fresh id.
    pub fn started(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: RunId::new(),
            name: name.into(),
            description: description.into(),
            status: RunStatus::Running,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        assert!(RunStatus::Running.can_transition_to(RunStatus::Completed));
        assert!(RunStatus::Running.can_transition_to(RunStatus::Failed));
    }

    #[test]
    fn test_terminal_states_never_transition() {
        for terminal in [RunStatus::Completed, RunStatus::Failed] {
            assert!(terminal.is_terminal());
            for target in [RunStatus::Running, RunStatus::Completed, RunStatus::Failed] {
                assert!(!terminal.can_transition_to(target));
            }
        }
    }

    #[test]
    fn test_started_run_is_running() {
        let run = EvaluationRun::started("nightly", "Evaluation of 2 models");
        assert_eq!(run.status, RunStatus::Running);
        assert!(!run.status.is_terminal());
    }
}
