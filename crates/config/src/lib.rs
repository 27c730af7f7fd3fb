// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Sweep configuration parsing and batch selection

mod batch;
mod parser;
mod section;
mod settings;

pub use batch::{BatchDef, BatchSelector, SelectError, SelectedBatch, TEST_BATCH};
pub use parser::{
    load_config, parse_config, parse_config_with_format, Format, ParseError, SweepConfig,
    DEFAULT_ACTION, DEFAULT_TOOL,
};
pub use section::{ParamEntry, ParamSection};
pub use settings::{
    SchedulerSettings, DEFAULT_ARTIFACT_MIN_BYTES, DEFAULT_JITTER_MAX_SECS,
    DEFAULT_JITTER_MIN_SECS, DEFAULT_TIMEOUT_SECS,
};
