// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parameter sections (`core_parameters`, `threshold_parameters`, ...)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sweep_core::ParamValue;

/// One entry of a parameter section.
///
/// Entries are either documented (`{ "value": .., "description": .. }`)
/// or a bare value. Objects without a `value` key carry no default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamEntry {
    Described {
        value: ParamValue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Bare(ParamValue),
    Other(serde_json::Value),
}

impl ParamEntry {
    /// The default this entry contributes, if any.
    pub fn value(&self) -> Option<&ParamValue> {
        match self {
            ParamEntry::Described { value, .. } | ParamEntry::Bare(value) => Some(value),
            ParamEntry::Other(_) => None,
        }
    }
}

/// A named group of parameter defaults. Keys keep file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSection(IndexMap<String, ParamEntry>);

impl ParamSection {
    pub fn get(&self, key: &str) -> Option<&ParamEntry> {
        self.0.get(key)
    }

    /// Entries that carry a default value, in file order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0
            .iter()
            .filter_map(|(k, entry)| entry.value().map(|v| (k.as_str(), v)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
