// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory accumulation of job results

use parking_lot::Mutex;
use std::sync::Arc;
use sweep_core::{BatchSummary, JobResult};

/// Results of one run, in the order they were pushed.
///
/// Cloning shares the same list; parallel workers push concurrently.
#[derive(Clone, Default)]
pub struct ResultStore {
    results: Arc<Mutex<Vec<JobResult>>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, result: JobResult) {
        self.results.lock().push(result);
    }

    pub fn len(&self) -> usize {
        self.results.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.lock().is_empty()
    }

    /// Snapshot of the results so far
    pub fn results(&self) -> Vec<JobResult> {
        self.results.lock().clone()
    }

    /// Summary of everything pushed so far.
    pub fn summary(&self, config_file: &str) -> BatchSummary {
        BatchSummary::from_results(config_file, self.results())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
