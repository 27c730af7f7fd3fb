// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Jobs and their results.

use crate::params::ConcreteParams;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Command-line flag carrying the tool's output prefix.
pub const OUTPUT_FLAG: &str = "--output=";

/// One fully resolved invocation of the external tool.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSpec {
    pub name: String,
    pub params: ConcreteParams,
    pub command: Vec<String>,
}

impl JobSpec {
    pub fn new(name: impl Into<String>, params: ConcreteParams, command: Vec<String>) -> Self {
        Self {
            name: name.into(),
            params,
            command,
        }
    }

    /// Output prefix declared by the first `--output=` argument.
    pub fn output_prefix(&self) -> Option<PathBuf> {
        self.command
            .iter()
            .find_map(|arg| arg.strip_prefix(OUTPUT_FLAG))
            .map(PathBuf::from)
    }

    /// The command joined with spaces, for display.
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

/// Lifecycle state of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Running,
    Success,
    Failed,
    Timeout,
    Error,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::Pending | JobStatus::Running)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::Running => write!(f, "running"),
            JobStatus::Success => write!(f, "success"),
            JobStatus::Failed => write!(f, "failed"),
            JobStatus::Timeout => write!(f, "timeout"),
            JobStatus::Error => write!(f, "error"),
        }
    }
}

/// Which finding artifacts a successful job left behind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactFlags {
    #[serde(default)]
    pub increased: bool,
    #[serde(default)]
    pub decreased: bool,
}

/// Outcome of one job.
///
/// Serialized field names are part of the summary file format and must
/// stay readable by older and newer builds alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResult {
    pub name: String,
    #[serde(default)]
    pub params: ConcreteParams,
    #[serde(default, deserialize_with = "deserialize_command")]
    pub command: Vec<String>,
    pub status: JobStatus,
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    #[serde(default, alias = "duration")]
    pub duration_seconds: Option<f64>,
    #[serde(default)]
    pub return_code: Option<i32>,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub artifact_flags: ArtifactFlags,
}

impl JobResult {
    /// A fresh result for a job that has not started.
    pub fn pending(spec: &JobSpec) -> Self {
        Self {
            name: spec.name.clone(),
            params: spec.params.clone(),
            command: spec.command.clone(),
            status: JobStatus::Pending,
            start_time: None,
            end_time: None,
            duration_seconds: None,
            return_code: None,
            stdout: None,
            stderr: None,
            artifact_flags: ArtifactFlags::default(),
        }
    }

    /// Record that the process is about to launch.
    pub fn start(&mut self, at: NaiveDateTime) {
        self.status = JobStatus::Running;
        self.start_time = Some(at);
    }

    /// Move to a terminal status. Later calls are ignored.
    pub fn finish(&mut self, status: JobStatus, at: NaiveDateTime) {
        if self.status.is_terminal() {
            return;
        }
        self.status = status;
        self.end_time = Some(at);
    }
}

/// Accept the current argv array or a legacy space-joined command string.
fn deserialize_command<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Command {
        Argv(Vec<String>),
        Joined(String),
        Missing(()),
    }

    Ok(match Command::deserialize(deserializer)? {
        Command::Argv(argv) => argv,
        Command::Joined(line) => line.split_whitespace().map(String::from).collect(),
        Command::Missing(()) => Vec::new(),
    })
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
