// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sweep configuration parsing

use crate::batch::BatchDef;
use crate::section::ParamSection;
use crate::settings::SchedulerSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use sweep_core::ParameterSet;
use thiserror::Error;

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
    Hcl,
}

impl Format {
    /// Pick a format from the file extension. Unknown extensions are JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Format::Toml,
            Some("hcl") => Format::Hcl,
            _ => Format::Json,
        }
    }
}

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read configuration {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),

    #[error("invalid configuration for {location}: {message}")]
    InvalidFormat { location: String, message: String },
}

/// Default external tool executable.
pub const DEFAULT_TOOL: &str = "dsi_studio";

/// Default action passed to the tool as `--action=<action>`.
pub const DEFAULT_ACTION: &str = "cnt";

fn default_tool() -> String {
    DEFAULT_TOOL.to_string()
}

fn default_action() -> String {
    DEFAULT_ACTION.to_string()
}

/// A parsed sweep configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_tool", alias = "dsi_studio_cmd")]
    pub tool_cmd: String,
    #[serde(default = "default_action")]
    pub tool_action: String,
    #[serde(default)]
    pub core_parameters: ParamSection,
    #[serde(default)]
    pub threshold_parameters: ParamSection,
    #[serde(default)]
    pub analysis_parameters: ParamSection,
    #[serde(default)]
    pub optional_parameters: ParamSection,
    #[serde(default)]
    pub batch_configurations: Vec<BatchDef>,
    #[serde(default)]
    pub scheduler: SchedulerSettings,
}

impl SweepConfig {
    /// Default value for every configured parameter.
    ///
    /// Sections merge in order core, threshold, analysis, optional; a key
    /// repeated in a later section takes the later value.
    pub fn defaults(&self) -> ParameterSet {
        let mut defaults = ParameterSet::new();
        for section in self.sections() {
            for (key, value) in section.values() {
                defaults.insert(key, value.clone());
            }
        }
        defaults
    }

    /// Defaults from `core_parameters` only (required tool inputs).
    pub fn core_defaults(&self) -> ParameterSet {
        self.core_parameters
            .values()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn sections(&self) -> [&ParamSection; 4] {
        [
            &self.core_parameters,
            &self.threshold_parameters,
            &self.analysis_parameters,
            &self.optional_parameters,
        ]
    }
}

/// Load a configuration file, picking the format from its extension.
pub fn load_config(path: &Path) -> Result<SweepConfig, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_with_format(&content, Format::from_path(path))
}

/// Parse a configuration from JSON content (convenience wrapper)
pub fn parse_config(content: &str) -> Result<SweepConfig, ParseError> {
    parse_config_with_format(content, Format::Json)
}

/// Parse a configuration from the given content in the specified format
pub fn parse_config_with_format(content: &str, format: Format) -> Result<SweepConfig, ParseError> {
    // 1. Serde does the heavy lifting
    let config: SweepConfig = match format {
        Format::Json => serde_json::from_str(content)?,
        Format::Toml => toml::from_str(content)?,
        Format::Hcl => hcl::from_str(content)?,
    };

    // 2. Validation
    if config.tool_cmd.trim().is_empty() {
        return Err(ParseError::InvalidFormat {
            location: "tool_cmd".to_string(),
            message: "tool command must not be empty".to_string(),
        });
    }
    config
        .scheduler
        .validate()
        .map_err(|message| ParseError::InvalidFormat {
            location: "scheduler".to_string(),
            message,
        })?;

    tracing::debug!(
        tool = %config.tool_cmd,
        batches = config.batch_configurations.len(),
        "parsed configuration"
    );

    Ok(config)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
