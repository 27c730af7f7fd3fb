// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reporter that writes progress through `tracing`

use super::{BatchBanner, Reporter};
use crate::display::DISPLAY_WRAPPER;
use std::path::Path;
use std::time::Duration;
use sweep_core::{BatchSummary, JobResult, JobSpec, JobStatus};

/// Production reporter
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl LogReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for LogReporter {
    fn batch_started(&self, banner: &BatchBanner) {
        tracing::info!(
            "BATCH {}/{}: {}",
            banner.position,
            banner.total,
            banner.name
        );
        if !banner.description.is_empty() {
            tracing::info!("Description: {}", banner.description);
        }
        tracing::info!("Generated {} parameter combinations", banner.combinations);
    }

    fn job_started(&self, index: usize, total: usize, job: &JobSpec) {
        let params = job
            .params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ");
        tracing::info!(job = %job.name, "Running analysis {}/{}: {}", index, total, job.name);
        tracing::info!(job = %job.name, "Parameters: {}", params);
        tracing::info!(job = %job.name, "Command: {}", job.command_line());
    }

    fn job_delayed(&self, name: &str, delay: Duration) {
        tracing::info!(
            job = name,
            delay_ms = delay.as_millis() as u64,
            "Waiting {:.1}s before starting",
            delay.as_secs_f64()
        );
    }

    fn job_finished(&self, result: &JobResult) {
        let elapsed = result.duration_seconds.unwrap_or_default();
        match result.status {
            JobStatus::Success => {
                let flags = result.artifact_flags;
                tracing::info!(
                    job = %result.name,
                    increased = flags.increased,
                    decreased = flags.decreased,
                    "completed successfully in {:.1}s",
                    elapsed
                );
            }
            JobStatus::Failed => tracing::error!(
                job = %result.name,
                return_code = ?result.return_code,
                stderr = result.stderr.as_deref().unwrap_or_default(),
                "failed after {:.1}s",
                elapsed
            ),
            JobStatus::Timeout => tracing::error!(job = %result.name, "timed out"),
            JobStatus::Error => tracing::error!(
                job = %result.name,
                error = result.stderr.as_deref().unwrap_or_default(),
                "could not run"
            ),
            JobStatus::Pending | JobStatus::Running => {
                tracing::warn!(job = %result.name, status = %result.status, "finished without a terminal status")
            }
        }
    }

    fn headless_hint(&self, result: &JobResult) {
        tracing::warn!(
            job = %result.name,
            "the tool could not open a display; run it under a virtual X server: {} -a {}",
            DISPLAY_WRAPPER,
            result.command.join(" ")
        );
    }

    fn duplicate_name(&self, name: &str, count: usize) {
        tracing::warn!(
            job = name,
            count,
            "duplicate job name; these jobs share an output directory"
        );
    }

    fn run_finished(&self, summary: &BatchSummary) {
        tracing::info!(
            total = summary.total_analyses,
            successful = summary.successful,
            failed = summary.failed,
            timeout = summary.timeout,
            error = summary.error,
            "Total: {}, successful: {}, failed: {}, timeout: {}, error: {}",
            summary.total_analyses,
            summary.successful,
            summary.failed,
            summary.timeout,
            summary.error
        );
    }

    fn summary_written(&self, path: &Path) {
        tracing::info!(path = %path.display(), "Summary saved");
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
