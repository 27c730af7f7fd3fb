// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turning configuration into job lists

use crate::command::CommandBuilder;
use crate::error::BatchError;
use chrono::NaiveDateTime;
use indexmap::IndexMap;
use sweep_config::{BatchDef, SweepConfig};
use sweep_core::{expand_grid, job_name, JobSpec, ParameterSet};

/// Jobs for one configured batch.
///
/// The batch's parameters are layered over the configuration defaults
/// before the grid is expanded, so every job carries every default key.
pub fn plan_batch(
    config: &SweepConfig,
    batch: &BatchDef,
    base_name: &str,
    builder: &CommandBuilder,
) -> Result<Vec<JobSpec>, BatchError> {
    plan_set(
        &batch.parameters.merged_over(&config.defaults()),
        base_name,
        builder,
    )
}

/// Jobs for an ad-hoc parameter set, expanded like a batch.
pub fn plan_custom(
    config: &SweepConfig,
    params: &ParameterSet,
    base_name: &str,
    builder: &CommandBuilder,
) -> Result<Vec<JobSpec>, BatchError> {
    plan_set(&params.merged_over(&config.defaults()), base_name, builder)
}

fn plan_set(
    set: &ParameterSet,
    base_name: &str,
    builder: &CommandBuilder,
) -> Result<Vec<JobSpec>, BatchError> {
    let combos = expand_grid(set).map_err(|source| BatchError::Grid {
        batch: base_name.to_string(),
        source,
    })?;
    Ok(combos
        .into_iter()
        .enumerate()
        .map(|(index, params)| {
            let name = job_name(&params, base_name, index);
            let command = builder.build(&name, &params);
            JobSpec::new(name, params, command)
        })
        .collect())
}

/// Base name for a custom run started at `now`.
pub fn custom_base_name(now: NaiveDateTime) -> String {
    format!("custom_analysis_{}", now.format("%Y%m%d_%H%M%S"))
}

/// Parse `--custom` JSON. It must be an object of parameters.
pub fn parse_custom(json: &str) -> Result<ParameterSet, BatchError> {
    serde_json::from_str(json).map_err(|e| BatchError::InvalidCustom(e.to_string()))
}

/// Names used by more than one job, with their counts, in first-seen order.
pub fn duplicate_names(jobs: &[JobSpec]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for job in jobs {
        *counts.entry(job.name.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
