//! Rendering scaffold results for people and machines.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use flarch_core::application::{BootstrapOutcome, ScaffoldReport};

use crate::output::OutputManager;

/// JSON shape of a finished `flarch new`.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub architecture: &'static str,
    pub project_root: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub bootstrap: &'static str,
    pub operations: usize,
    pub succeeded: usize,
    pub complete: bool,
    pub failures: Vec<FailureEntry>,
}

#[derive(Debug, Serialize)]
pub struct FailureEntry {
    /// Manifest position, or `None` for the bootstrap step.
    pub index: Option<usize>,
    pub kind: &'static str,
    pub error: String,
}

impl RunSummary {
    pub fn new(report: &ScaffoldReport, started_at: DateTime<Utc>, finished_at: DateTime<Utc>) -> Self {
        let mut failures = Vec::new();
        if let BootstrapOutcome::Failed(e) = &report.bootstrap {
            failures.push(FailureEntry {
                index: None,
                kind: "bootstrap",
                error: e.to_string(),
            });
        }

        let (operations, succeeded) = match &report.execution {
            Some(execution) => {
                failures.extend(execution.failures().map(|outcome| FailureEntry {
                    index: Some(outcome.index),
                    kind: outcome.operation.kind(),
                    error: outcome
                        .error()
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                }));
                (execution.total(), execution.succeeded())
            }
            None => (0, 0),
        };

        Self {
            run_id: report.run_id,
            architecture: report.architecture.slug(),
            project_root: report.project_root.clone(),
            started_at,
            finished_at,
            bootstrap: bootstrap_label(&report.bootstrap),
            operations,
            succeeded,
            complete: report.is_complete(),
            failures,
        }
    }

    /// Human summary: one line per failure, then the totals.
    pub fn render(&self, output: &OutputManager) -> std::io::Result<()> {
        for failure in &self.failures {
            let position = failure
                .index
                .map_or_else(|| "bootstrap".to_string(), |i| format!("step {}", i + 1));
            output.error(&format!("{position}: {}", failure.error))?;
        }

        let elapsed = self.finished_at - self.started_at;
        let totals = format!(
            "{}/{} operations applied in {:.1}s (run {})",
            self.succeeded,
            self.operations,
            elapsed.num_milliseconds() as f64 / 1000.0,
            self.run_id
        );

        if self.complete {
            output.success(&totals)
        } else {
            output.warning(&totals)
        }
    }
}

fn bootstrap_label(outcome: &BootstrapOutcome) -> &'static str {
    match outcome {
        BootstrapOutcome::Skipped => "skipped",
        BootstrapOutcome::Succeeded => "succeeded",
        BootstrapOutcome::Failed(_) => "failed",
    }
}
