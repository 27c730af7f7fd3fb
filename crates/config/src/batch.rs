// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch definitions and selection

use crate::parser::SweepConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use sweep_core::ParameterSet;
use thiserror::Error;

/// Name of the smoke-test batch. It only runs when selected explicitly.
pub const TEST_BATCH: &str = "test_run";

/// One entry of `batch_configurations`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: ParameterSet,
}

impl BatchDef {
    /// Name of the batch, or `batch_{index}` when unnamed.
    pub fn display_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("batch_{}", index))
    }
}

/// Which batches a run covers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BatchSelector {
    /// Every batch except [`TEST_BATCH`]
    #[default]
    All,
    /// One batch by 0-based position in the file
    Index(usize),
    /// One batch by name
    Name(String),
}

impl FromStr for BatchSelector {
    type Err = std::convert::Infallible;

    /// Digits select by index; anything else selects by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<usize>() {
            Ok(index) => BatchSelector::Index(index),
            Err(_) => BatchSelector::Name(s.to_string()),
        })
    }
}

impl fmt::Display for BatchSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchSelector::All => write!(f, "all"),
            BatchSelector::Index(i) => write!(f, "#{}", i),
            BatchSelector::Name(n) => write!(f, "{}", n),
        }
    }
}

/// Errors from batch selection
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("invalid batch index: {index} (configuration has {count} batches)")]
    InvalidIndex { index: usize, count: usize },
    #[error("no batch named '{0}' found in configuration")]
    NotFound(String),
}

/// A batch chosen for this run, with its position for progress output
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedBatch<'a> {
    pub position: usize,
    pub total: usize,
    pub name: String,
    pub def: &'a BatchDef,
}

impl SweepConfig {
    /// Resolve a selector to the batches it covers, in file order.
    ///
    /// [`BatchSelector::All`] skips [`TEST_BATCH`] and may return nothing.
    pub fn select_batches(
        &self,
        selector: &BatchSelector,
    ) -> Result<Vec<SelectedBatch<'_>>, SelectError> {
        let batches = &self.batch_configurations;
        match selector {
            BatchSelector::All => {
                let chosen: Vec<(usize, &BatchDef)> = batches
                    .iter()
                    .enumerate()
                    .filter(|(_, b)| b.name.as_deref() != Some(TEST_BATCH))
                    .collect();
                let total = chosen.len();
                Ok(chosen
                    .into_iter()
                    .enumerate()
                    .map(|(position, (index, def))| SelectedBatch {
                        position,
                        total,
                        name: def.display_name(index),
                        def,
                    })
                    .collect())
            }
            BatchSelector::Index(index) => {
                let def = batches.get(*index).ok_or(SelectError::InvalidIndex {
                    index: *index,
                    count: batches.len(),
                })?;
                Ok(vec![SelectedBatch {
                    position: *index,
                    total: batches.len(),
                    name: def.display_name(*index),
                    def,
                }])
            }
            BatchSelector::Name(name) => {
                let (index, def) = batches
                    .iter()
                    .enumerate()
                    .find(|(_, b)| b.name.as_deref() == Some(name.as_str()))
                    .ok_or_else(|| SelectError::NotFound(name.clone()))?;
                Ok(vec![SelectedBatch {
                    position: 0,
                    total: 1,
                    name: def.display_name(index),
                    def,
                }])
            }
        }
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
