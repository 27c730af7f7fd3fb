// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sweep-core: parameter sweeps, jobs, and run summaries

pub mod clock;
pub mod grid;
pub mod job;
pub mod naming;
pub mod params;
pub mod range;
pub mod summary;
pub mod value;

pub use clock::{Clock, FakeClock, SystemClock};
pub use grid::{expand_grid, grid_size, GridError, MAX_GRID_SIZE};
pub use job::{ArtifactFlags, JobResult, JobSpec, JobStatus, OUTPUT_FLAG};
pub use naming::{job_name, NAME_KEYS};
pub use params::{ConcreteParams, ParameterSet};
pub use range::{expand_range, RangeSpec, MAX_RANGE_VALUES};
pub use summary::BatchSummary;
pub use value::{ParamValue, Scalar};
