// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregate outcome of one scheduler run.

use crate::job::{JobResult, JobStatus};
use serde::{Deserialize, Serialize};

/// Persisted record of a run; the input to retries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    #[serde(default)]
    pub config_file: String,
    #[serde(default)]
    pub total_analyses: usize,
    #[serde(default)]
    pub successful: usize,
    #[serde(default)]
    pub failed: usize,
    #[serde(default)]
    pub timeout: usize,
    #[serde(default)]
    pub error: usize,
    #[serde(default)]
    pub analyses: Vec<JobResult>,
}

impl BatchSummary {
    /// Build a summary, computing the tallies from `results`.
    pub fn from_results(config_file: impl Into<String>, results: Vec<JobResult>) -> Self {
        let count = |status: JobStatus| results.iter().filter(|r| r.status == status).count();
        Self {
            config_file: config_file.into(),
            total_analyses: results.len(),
            successful: count(JobStatus::Success),
            failed: count(JobStatus::Failed),
            timeout: count(JobStatus::Timeout),
            error: count(JobStatus::Error),
            analyses: results,
        }
    }

    /// Results whose tool run exited non-zero. Timeouts and launch errors
    /// are not included.
    pub fn failed_jobs(&self) -> impl Iterator<Item = &JobResult> {
        self.analyses
            .iter()
            .filter(|r| r.status == JobStatus::Failed)
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
