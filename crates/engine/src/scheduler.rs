// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded-concurrency job scheduling

use crate::executor::JobExecutor;
use crate::jitter::StartupJitter;
use crate::store::ResultStore;
use std::sync::Arc;
use sweep_adapters::{Reporter, ToolRunner};
use sweep_core::{Clock, JobSpec};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Runs job lists with at most `workers` tools at once.
pub struct Scheduler<T, R, C> {
    executor: Arc<JobExecutor<T, R, C>>,
    reporter: R,
    workers: usize,
    jitter: StartupJitter,
}

impl<T, R, C> Scheduler<T, R, C>
where
    T: ToolRunner,
    R: Reporter,
    C: Clock,
{
    /// `workers` below one is treated as one.
    pub fn new(
        executor: JobExecutor<T, R, C>,
        reporter: R,
        workers: usize,
        jitter: StartupJitter,
    ) -> Self {
        Self {
            executor: Arc::new(executor),
            reporter,
            workers: workers.max(1),
            jitter,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run every job and push its result to `store`.
    ///
    /// With one worker, jobs run in order and results land in input order.
    /// With more, each job first sleeps its startup jitter and results land
    /// in completion order. Returns once every job is terminal.
    pub async fn run(&self, jobs: Vec<JobSpec>, store: &ResultStore) {
        let total = jobs.len();
        if self.workers == 1 {
            for (i, job) in jobs.iter().enumerate() {
                self.reporter.job_started(i + 1, total, job);
                store.push(self.executor.execute(job).await);
            }
            return;
        }

        tracing::info!(workers = self.workers, jobs = total, "running in parallel");
        let permits = Arc::new(Semaphore::new(self.workers));
        let mut tasks = JoinSet::new();
        for (i, job) in jobs.into_iter().enumerate() {
            let permits = Arc::clone(&permits);
            let executor = Arc::clone(&self.executor);
            let reporter = self.reporter.clone();
            let store = store.clone();
            let jitter = self.jitter;
            tasks.spawn(async move {
                let Ok(_permit) = permits.acquire_owned().await else {
                    return;
                };
                reporter.job_started(i + 1, total, &job);
                let delay = jitter.sample();
                if !delay.is_zero() {
                    reporter.job_delayed(&job.name, delay);
                    tokio::time::sleep(delay).await;
                }
                store.push(executor.execute(&job).await);
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "parallel execution error");
            }
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
