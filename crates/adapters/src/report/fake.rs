// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake reporter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{BatchBanner, Reporter};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use sweep_core::{BatchSummary, JobResult, JobSpec, JobStatus};

/// Recorded reporter call
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    BatchStarted(BatchBanner),
    JobStarted {
        index: usize,
        total: usize,
        name: String,
    },
    JobDelayed {
        name: String,
        delay: Duration,
    },
    JobFinished {
        name: String,
        status: JobStatus,
    },
    HeadlessHint(String),
    DuplicateName {
        name: String,
        count: usize,
    },
    RunFinished {
        total: usize,
        successful: usize,
        failed: usize,
    },
    SummaryWritten(PathBuf),
}

/// Fake reporter for testing
#[derive(Clone, Default)]
pub struct FakeReporter {
    events: Arc<Mutex<Vec<ReportEvent>>>,
}

impl FakeReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded events, in call order
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().clone()
    }

    /// Names of jobs that received a headless hint
    pub fn hints(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                ReportEvent::HeadlessHint(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// Jitter delays that were announced
    pub fn delays(&self) -> Vec<Duration> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                ReportEvent::JobDelayed { delay, .. } => Some(*delay),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ReportEvent) {
        self.events.lock().push(event);
    }
}

impl Reporter for FakeReporter {
    fn batch_started(&self, banner: &BatchBanner) {
        self.push(ReportEvent::BatchStarted(banner.clone()));
    }

    fn job_started(&self, index: usize, total: usize, job: &JobSpec) {
        self.push(ReportEvent::JobStarted {
            index,
            total,
            name: job.name.clone(),
        });
    }

    fn job_delayed(&self, name: &str, delay: Duration) {
        self.push(ReportEvent::JobDelayed {
            name: name.to_string(),
            delay,
        });
    }

    fn job_finished(&self, result: &JobResult) {
        self.push(ReportEvent::JobFinished {
            name: result.name.clone(),
            status: result.status,
        });
    }

    fn headless_hint(&self, result: &JobResult) {
        self.push(ReportEvent::HeadlessHint(result.name.clone()));
    }

    fn duplicate_name(&self, name: &str, count: usize) {
        self.push(ReportEvent::DuplicateName {
            name: name.to_string(),
            count,
        });
    }

    fn run_finished(&self, summary: &BatchSummary) {
        self.push(ReportEvent::RunFinished {
            total: summary.total_analyses,
            successful: summary.successful,
            failed: summary.failed,
        });
    }

    fn summary_written(&self, path: &Path) {
        self.push(ReportEvent::SummaryWritten(path.to_path_buf()));
    }
}
