// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cartesian expansion of a parameter set into per-job parameters.

use crate::params::{ConcreteParams, ParameterSet};
use crate::value::{ParamValue, Scalar};
use thiserror::Error;

/// Most combinations one parameter set may expand to.
pub const MAX_GRID_SIZE: usize = 100_000;

/// A parameter set that cannot be expanded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("parameter grid has {size} combinations (limit {MAX_GRID_SIZE})")]
    TooLarge { size: usize },
    #[error("parameter grid size overflows (limit {MAX_GRID_SIZE} combinations)")]
    Overflow,
}

/// Expand every list or range parameter into the Cartesian product.
///
/// Keys keep their order from `set`. Enumeration is odometer order: the
/// last swept parameter varies fastest. A set without sweeps yields one
/// combination; a sweep over an empty list yields none. Grids larger than
/// [`MAX_GRID_SIZE`] are rejected before any combination is built.
pub fn expand_grid(set: &ParameterSet) -> Result<Vec<ConcreteParams>, GridError> {
    let total = grid_size(set)?;
    let columns: Vec<(&str, Column<'_>)> = set
        .iter()
        .map(|(key, value)| (key, Column::of(value)))
        .collect();

    let sweep_sizes: Vec<usize> = columns
        .iter()
        .filter_map(|(_, col)| match col {
            Column::Swept(values) => Some(values.len()),
            Column::Fixed(_) => None,
        })
        .collect();

    let mut combos = Vec::with_capacity(total);
    let mut odometer = vec![0usize; sweep_sizes.len()];
    for _ in 0..total {
        let mut sweep_idx = 0;
        let combo = columns
            .iter()
            .map(|(key, col)| {
                let scalar = match col {
                    Column::Fixed(s) => (*s).clone(),
                    Column::Swept(values) => {
                        let picked = values[odometer[sweep_idx]].clone();
                        sweep_idx += 1;
                        picked
                    }
                };
                (key.to_string(), scalar)
            })
            .collect::<ConcreteParams>();
        combos.push(combo);
        advance(&mut odometer, &sweep_sizes);
    }
    Ok(combos)
}

enum Column<'a> {
    Fixed(&'a Scalar),
    Swept(Vec<Scalar>),
}

impl<'a> Column<'a> {
    fn of(value: &'a ParamValue) -> Self {
        match value {
            ParamValue::Scalar(s) => Column::Fixed(s),
            other => Column::Swept(other.sweep_values().unwrap_or_default()),
        }
    }
}

/// Number of combinations [`expand_grid`] would produce, within the same
/// limits.
pub fn grid_size(set: &ParameterSet) -> Result<usize, GridError> {
    let sizes: Vec<usize> = set
        .iter()
        .filter_map(|(_, value)| value.sweep_values().map(|v| v.len()))
        .collect();
    if sizes.contains(&0) {
        return Ok(0);
    }
    let size = sizes
        .iter()
        .try_fold(1usize, |acc, n| acc.checked_mul(*n))
        .ok_or(GridError::Overflow)?;
    if size > MAX_GRID_SIZE {
        return Err(GridError::TooLarge { size });
    }
    Ok(size)
}

fn advance(odometer: &mut [usize], sizes: &[usize]) {
    for pos in (0..odometer.len()).rev() {
        odometer[pos] += 1;
        if odometer[pos] < sizes[pos] {
            return;
        }
        odometer[pos] = 0;
    }
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
