// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Re-running failed jobs from an earlier summary

use crate::command::CommandBuilder;
use sweep_core::{BatchSummary, JobSpec};

/// Jobs to re-run from `summary`: only those whose tool exited non-zero.
///
/// Commands are rebuilt from the stored name and parameters so that a
/// changed configuration takes effect. Stored commands are ignored.
pub fn plan_retry(summary: &BatchSummary, builder: &CommandBuilder) -> Vec<JobSpec> {
    summary
        .failed_jobs()
        .map(|prior| {
            let command = builder.build(&prior.name, &prior.params);
            JobSpec::new(prior.name.clone(), prior.params.clone(), command)
        })
        .collect()
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
