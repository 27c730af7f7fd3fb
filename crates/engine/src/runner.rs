// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One invocation of the batch runner, end to end.
//!
//! Planning happens first and touches nothing on disk. A real run then
//! checks the tool, creates the output directory, schedules every planned
//! job, and writes exactly one new summary file.

use crate::command::CommandBuilder;
use crate::env;
use crate::error::BatchError;
use crate::executor::{ExecutionPolicy, JobExecutor};
use crate::health::check_tool;
use crate::jitter::StartupJitter;
use crate::plan::{custom_base_name, duplicate_names, plan_batch, plan_custom};
use crate::retry::plan_retry;
use crate::scheduler::Scheduler;
use crate::store::ResultStore;
use std::path::PathBuf;
use std::time::Duration;
use sweep_adapters::{BatchBanner, Reporter, ToolRunner, HEALTH_CHECK_TIMEOUT};
use sweep_config::{BatchSelector, SchedulerSettings, SweepConfig};
use sweep_core::{BatchSummary, Clock, JobSpec, ParameterSet};
use sweep_storage::{load_summary, save_summary, summary_path};

/// What a run covers
#[derive(Debug, Clone, PartialEq)]
pub enum RunMode {
    /// Configured batches
    Batches(BatchSelector),
    /// One ad-hoc parameter set layered over the defaults
    Custom(ParameterSet),
    /// Failed jobs of an earlier summary file
    Retry(PathBuf),
}

/// Everything a run needs besides the configuration
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Recorded in the summary as `config_file`
    pub config_file: String,
    pub output_dir: PathBuf,
    pub workers: usize,
    pub mode: RunMode,
    pub dry_run: bool,
}

/// Jobs of one batch, with the banner to show before them
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedBatch {
    pub banner: Option<BatchBanner>,
    pub jobs: Vec<JobSpec>,
}

#[derive(Debug)]
pub enum RunOutcome {
    /// Nothing ran; these jobs would have
    DryRun(Vec<PlannedBatch>),
    Completed {
        summary: BatchSummary,
        path: PathBuf,
    },
}

/// Scheduling knobs after file settings and environment overrides
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub policy: ExecutionPolicy,
    pub jitter: StartupJitter,
    pub health_timeout: Duration,
    /// Prefix for headless hosts, if one was detected
    pub wrapper: Option<Vec<String>>,
}

impl RunSettings {
    pub fn from_config(settings: &SchedulerSettings) -> Self {
        let (min, max) = settings.jitter();
        Self {
            policy: ExecutionPolicy::from_settings(settings),
            jitter: StartupJitter::new(min, max),
            health_timeout: HEALTH_CHECK_TIMEOUT,
            wrapper: None,
        }
    }

    /// Apply `SWEEP_TIMEOUT_MS`, `SWEEP_JITTER_MS` and `SWEEP_HEALTH_TIMEOUT_MS`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(timeout) = env::timeout_override() {
            self.policy.timeout = timeout;
        }
        if let Some((min, max)) = env::jitter_override() {
            self.jitter = StartupJitter::new(min, max);
        }
        self.health_timeout = env::health_check_timeout();
        self
    }

    pub fn with_wrapper(mut self, wrapper: Option<Vec<String>>) -> Self {
        self.wrapper = wrapper;
        self
    }
}

/// Drives planning, execution and persistence for one request
pub struct Runner<T, R, C> {
    tool: T,
    reporter: R,
    clock: C,
    settings: RunSettings,
}

impl<T, R, C> Runner<T, R, C>
where
    T: ToolRunner,
    R: Reporter,
    C: Clock,
{
    pub fn new(tool: T, reporter: R, clock: C, settings: RunSettings) -> Self {
        Self {
            tool,
            reporter,
            clock,
            settings,
        }
    }

    fn command_builder(&self, config: &SweepConfig, request: &RunRequest) -> CommandBuilder {
        let builder = CommandBuilder::from_config(config, &request.output_dir);
        match &self.settings.wrapper {
            Some(wrapper) if config.scheduler.display_wrapper => {
                builder.with_wrapper(wrapper.clone())
            }
            _ => builder,
        }
    }

    /// Resolve the request to job lists without side effects.
    pub fn plan(
        &self,
        config: &SweepConfig,
        request: &RunRequest,
    ) -> Result<Vec<PlannedBatch>, BatchError> {
        let builder = self.command_builder(config, request);
        match &request.mode {
            RunMode::Batches(selector) => {
                let selected = config.select_batches(selector)?;
                if selected.is_empty() {
                    tracing::warn!("no batch configurations found (after filtering)");
                } else {
                    tracing::info!(batches = selected.len(), "starting batch processing");
                }
                selected
                    .into_iter()
                    .map(|batch| {
                        let jobs = plan_batch(config, batch.def, &batch.name, &builder)?;
                        Ok::<_, BatchError>(PlannedBatch {
                            banner: Some(BatchBanner {
                                position: batch.position + 1,
                                total: batch.total,
                                name: batch.name,
                                description: batch.def.description.clone(),
                                combinations: jobs.len(),
                            }),
                            jobs,
                        })
                    })
                    .collect()
            }
            RunMode::Custom(params) => {
                let base = custom_base_name(self.clock.now());
                Ok(vec![PlannedBatch {
                    banner: None,
                    jobs: plan_custom(config, params, &base, &builder)?,
                }])
            }
            RunMode::Retry(path) => {
                let prior = load_summary(path)?;
                let jobs = plan_retry(&prior, &builder);
                if jobs.is_empty() {
                    tracing::info!(summary = %path.display(), "no failed analyses found in summary");
                } else {
                    tracing::info!(count = jobs.len(), "found failed analyses, retrying");
                }
                Ok(vec![PlannedBatch {
                    banner: None,
                    jobs,
                }])
            }
        }
    }

    /// Plan, then (unless dry-run) execute and save a summary.
    pub async fn run(
        &self,
        config: &SweepConfig,
        request: &RunRequest,
    ) -> Result<RunOutcome, BatchError> {
        let planned = self.plan(config, request)?;
        if request.dry_run {
            return Ok(RunOutcome::DryRun(planned));
        }

        check_tool(&self.tool, &config.tool_cmd, self.settings.health_timeout).await?;
        tokio::fs::create_dir_all(&request.output_dir)
            .await
            .map_err(|source| BatchError::CreateDir {
                path: request.output_dir.clone(),
                source,
            })?;

        let executor = JobExecutor::new(
            self.tool.clone(),
            self.reporter.clone(),
            self.clock.clone(),
            self.settings.policy,
        );
        let scheduler = Scheduler::new(
            executor,
            self.reporter.clone(),
            request.workers,
            self.settings.jitter,
        );
        let store = ResultStore::new();

        for batch in planned {
            if let Some(banner) = &batch.banner {
                self.reporter.batch_started(banner);
            }
            for (name, count) in duplicate_names(&batch.jobs) {
                self.reporter.duplicate_name(&name, count);
            }
            scheduler.run(batch.jobs, &store).await;
        }

        let summary = store.summary(&request.config_file);
        let path = summary_path(&request.output_dir, self.clock.now());
        save_summary(&summary, &path)?;
        self.reporter.run_finished(&summary);
        self.reporter.summary_written(&path);
        Ok(RunOutcome::Completed { summary, path })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
