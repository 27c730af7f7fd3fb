// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runs one job and classifies its outcome

use std::path::Path;
use std::time::Duration;
use sweep_adapters::{Reporter, ToolRunner, TOOL_TIMEOUT};
use sweep_config::SchedulerSettings;
use sweep_core::{ArtifactFlags, Clock, JobResult, JobSpec, JobStatus};

/// Suffix of the "increased connectivity" artifact next to the output prefix.
pub const INCREASED_SUFFIX: &str = ".inc.tt.gz";

/// Suffix of the "decreased connectivity" artifact next to the output prefix.
pub const DECREASED_SUFFIX: &str = ".dec.tt.gz";

/// Stderr marker of a tool that could not open a display.
pub const HEADLESS_MARKER: &str = "qt.qpa";

/// Return codes of a tool that aborted (SIGABRT, or 128 + SIGABRT via a shell).
pub const ABORT_CODES: [i32; 2] = [-6, 134];

/// Limits applied to every job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionPolicy {
    pub timeout: Duration,
    /// Artifacts must be strictly larger than this to count as a finding.
    pub artifact_min_bytes: u64,
}

impl Default for ExecutionPolicy {
    fn default() -> Self {
        Self {
            timeout: TOOL_TIMEOUT,
            artifact_min_bytes: 1000,
        }
    }
}

impl ExecutionPolicy {
    pub fn from_settings(settings: &SchedulerSettings) -> Self {
        Self {
            timeout: settings.timeout(),
            artifact_min_bytes: settings.artifact_min_bytes,
        }
    }
}

/// Executes jobs through a [`ToolRunner`]
pub struct JobExecutor<T, R, C> {
    tool: T,
    reporter: R,
    clock: C,
    policy: ExecutionPolicy,
}

impl<T, R, C> JobExecutor<T, R, C>
where
    T: ToolRunner,
    R: Reporter,
    C: Clock,
{
    pub fn new(tool: T, reporter: R, clock: C, policy: ExecutionPolicy) -> Self {
        Self {
            tool,
            reporter,
            clock,
            policy,
        }
    }

    pub fn policy(&self) -> &ExecutionPolicy {
        &self.policy
    }

    /// Run `job` to a terminal result. Never fails; problems become statuses.
    ///
    /// `start_time`/`end_time` bracket only the tool process.
    pub async fn execute(&self, job: &JobSpec) -> JobResult {
        let mut result = JobResult::pending(job);
        let prefix = job.output_prefix();

        if let Some(dir) = prefix.as_deref().and_then(Path::parent) {
            if let Err(e) = tokio::fs::create_dir_all(dir).await {
                result.stderr = Some(format!(
                    "failed to create output directory {}: {}",
                    dir.display(),
                    e
                ));
                result.finish(JobStatus::Error, self.clock.now());
                self.reporter.job_finished(&result);
                return result;
            }
        }

        result.start(self.clock.now());
        let started = tokio::time::Instant::now();
        let outcome = self.tool.run(&job.command, self.policy.timeout).await;
        let elapsed = started.elapsed().as_secs_f64();
        let ended = self.clock.now();

        match outcome {
            Ok(output) => {
                result.duration_seconds = Some(elapsed);
                result.return_code = Some(output.return_code);
                result.stdout = Some(output.stdout);
                result.stderr = Some(output.stderr);
                if result.return_code == Some(0) {
                    if let Some(prefix) = prefix.as_deref() {
                        result.artifact_flags =
                            inspect_artifacts(prefix, self.policy.artifact_min_bytes).await;
                    }
                    result.finish(JobStatus::Success, ended);
                } else {
                    result.finish(JobStatus::Failed, ended);
                }
            }
            Err(e) if e.is_timeout() => {
                result.duration_seconds = Some(elapsed);
                result.finish(JobStatus::Timeout, ended);
            }
            Err(e) => {
                result.stderr = Some(e.to_string());
                result.finish(JobStatus::Error, ended);
            }
        }

        self.reporter.job_finished(&result);
        if needs_display(&result) {
            self.reporter.headless_hint(&result);
        }
        result
    }
}

/// Whether a failed result looks like the tool could not open a display.
pub fn needs_display(result: &JobResult) -> bool {
    if result.status != JobStatus::Failed {
        return false;
    }
    let marker = result
        .stderr
        .as_deref()
        .is_some_and(|stderr| stderr.contains(HEADLESS_MARKER));
    let aborted = result
        .return_code
        .is_some_and(|code| ABORT_CODES.contains(&code));
    marker || aborted
}

/// Check the finding artifacts next to `prefix`.
pub async fn inspect_artifacts(prefix: &Path, min_bytes: u64) -> ArtifactFlags {
    ArtifactFlags {
        increased: artifact_present(prefix, INCREASED_SUFFIX, min_bytes).await,
        decreased: artifact_present(prefix, DECREASED_SUFFIX, min_bytes).await,
    }
}

async fn artifact_present(prefix: &Path, suffix: &str, min_bytes: u64) -> bool {
    let mut path = prefix.as_os_str().to_owned();
    path.push(suffix);
    match tokio::fs::metadata(&path).await {
        Ok(meta) => meta.is_file() && meta.len() > min_bytes,
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
