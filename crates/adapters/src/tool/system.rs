// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tool runner backed by real OS processes

use super::{ToolOutput, ToolRunner};
use crate::subprocess::{exit_code, run_with_timeout, RunError};
use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

/// Runs the tool as a child process with piped stdout/stderr
#[derive(Clone, Debug, Default)]
pub struct SystemToolRunner;

impl SystemToolRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToolRunner for SystemToolRunner {
    async fn run(&self, argv: &[String], timeout: Duration) -> Result<ToolOutput, RunError> {
        let Some((program, args)) = argv.split_first() else {
            return Err(RunError::Launch {
                description: "tool".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
            });
        };

        let mut cmd = Command::new(program);
        cmd.args(args);
        let output = run_with_timeout(cmd, timeout, program).await?;

        Ok(ToolOutput {
            return_code: exit_code(&output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod tests;
