// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic job names.

use crate::params::ConcreteParams;

/// Parameters that make up a descriptive job name, in order.
pub const NAME_KEYS: [&str; 4] = ["index_name", "effect_size", "length_threshold", "permutation"];

/// Name a job from its parameters.
///
/// Uses `{index_name}_{effect_size}_{length_threshold}_{permutation}` when
/// all four are present, otherwise `{base}_combo_{index + 1}`. Whole numbers
/// render without a decimal point. Booleans render as `1`/`0`, the same as
/// on the command line, so a `true` parameter names a job `..._1` rather
/// than `..._True`. Names are not guaranteed unique.
pub fn job_name(params: &ConcreteParams, base: &str, index: usize) -> String {
    let parts: Option<Vec<String>> = NAME_KEYS
        .iter()
        .map(|key| params.get_present(key).map(ToString::to_string))
        .collect();

    match parts {
        Some(parts) => parts.join("_"),
        None => format!("{}_combo_{}", base, index + 1),
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
