// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tool command lines from job parameters

use std::path::{Path, PathBuf};
use sweep_config::SweepConfig;
use sweep_core::{ConcreteParams, ParamValue, OUTPUT_FLAG};

/// Inputs the tool cannot run without. Per-job values win over
/// `core_parameters` defaults.
pub const REQUIRED_KEYS: [&str; 4] = ["source", "demo", "variable_list", "voi"];

/// Parameters passed through as `--key=value` when present and non-empty.
pub const OPTIONAL_KEYS: [&str; 17] = [
    "index_name",
    "t_threshold",
    "effect_size",
    "length_threshold",
    "fdr_threshold",
    "permutation",
    "thread_count",
    "exclude_cb",
    "normalize_iso",
    "tip_iteration",
    "region_pruning",
    "no_tractogram",
    "output",
    "select",
    "seed",
    "roi",
    "roa",
];

/// Builds the argument vector for one job.
///
/// Pure: it never touches the filesystem. The executor creates the
/// output directory before launching.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandBuilder {
    tool: String,
    action: String,
    wrapper: Vec<String>,
    core_defaults: ConcreteParams,
    output_dir: PathBuf,
}

impl CommandBuilder {
    pub fn new(
        tool: impl Into<String>,
        action: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            tool: tool.into(),
            action: action.into(),
            wrapper: Vec::new(),
            core_defaults: ConcreteParams::new(),
            output_dir: output_dir.into(),
        }
    }

    /// Builder for `config`, writing under `output_dir`.
    ///
    /// Only scalar `core_parameters` defaults are used as fallbacks.
    pub fn from_config(config: &SweepConfig, output_dir: impl Into<PathBuf>) -> Self {
        let core_defaults = config
            .core_defaults()
            .iter()
            .filter_map(|(key, value)| match value {
                ParamValue::Scalar(scalar) => Some((key.to_string(), scalar.clone())),
                _ => None,
            })
            .collect();
        Self {
            core_defaults,
            ..Self::new(&config.tool_cmd, &config.tool_action, output_dir)
        }
    }

    /// Prefix every command with `wrapper` (e.g. a virtual display).
    pub fn with_wrapper(mut self, wrapper: Vec<String>) -> Self {
        self.wrapper = wrapper;
        self
    }

    pub fn with_core_defaults(mut self, defaults: ConcreteParams) -> Self {
        self.core_defaults = defaults;
        self
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Default output prefix for a job: `<output_dir>/<name>/<name>`.
    pub fn output_prefix(&self, name: &str) -> PathBuf {
        self.output_dir.join(name).join(name)
    }

    /// Argument vector for job `name` with `params`.
    ///
    /// Order: wrapper, tool, action, required inputs, allow-listed options
    /// in parameter order, then `--output=` if no `output` was given.
    pub fn build(&self, name: &str, params: &ConcreteParams) -> Vec<String> {
        let mut argv = self.wrapper.clone();
        argv.push(self.tool.clone());
        argv.push(format!("--action={}", self.action));

        for key in REQUIRED_KEYS {
            let value = if params.contains_key(key) {
                params.get_present(key)
            } else {
                self.core_defaults.get_present(key)
            };
            if let Some(value) = value {
                argv.push(format!("--{key}={value}"));
            }
        }

        for (key, value) in params.iter() {
            if OPTIONAL_KEYS.contains(&key) && !value.is_blank() {
                argv.push(format!("--{key}={value}"));
            }
        }

        if !argv.iter().any(|arg| arg.starts_with(OUTPUT_FLAG)) {
            argv.push(format!(
                "{}{}",
                OUTPUT_FLAG,
                self.output_prefix(name).display()
            ));
        }
        argv
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
