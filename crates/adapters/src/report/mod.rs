// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress reporting adapters

mod log;

pub use log::LogReporter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeReporter, ReportEvent};

use std::path::Path;
use std::time::Duration;
use sweep_core::{BatchSummary, JobResult, JobSpec};

/// Banner information for one batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchBanner {
    /// 1-based position among the batches of this run
    pub position: usize,
    pub total: usize,
    pub name: String,
    pub description: String,
    pub combinations: usize,
}

/// Receiver of human-readable run progress.
///
/// Implementations must not block; they are called from scheduler tasks.
pub trait Reporter: Clone + Send + Sync + 'static {
    fn batch_started(&self, banner: &BatchBanner);

    /// A job is about to run. `index` is 1-based.
    fn job_started(&self, index: usize, total: usize, job: &JobSpec);

    /// A job is sleeping for its startup jitter.
    fn job_delayed(&self, name: &str, delay: Duration);

    fn job_finished(&self, result: &JobResult);

    /// A failed job looks like it could not open a display.
    fn headless_hint(&self, result: &JobResult);

    /// `name` is produced by `count` jobs of one plan.
    fn duplicate_name(&self, name: &str, count: usize);

    /// Final tallies of a run.
    fn run_finished(&self, summary: &BatchSummary);

    fn summary_written(&self, path: &Path);
}
