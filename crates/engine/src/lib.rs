// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Sweep execution engine

mod command;
pub mod env;
mod error;
mod executor;
mod health;
mod jitter;
mod plan;
mod retry;
mod runner;
mod scheduler;
mod store;

pub use command::{CommandBuilder, OPTIONAL_KEYS, REQUIRED_KEYS};
pub use error::BatchError;
pub use executor::{
    inspect_artifacts, needs_display, ExecutionPolicy, JobExecutor, DECREASED_SUFFIX,
    INCREASED_SUFFIX,
};
pub use health::check_tool;
pub use jitter::StartupJitter;
pub use plan::{custom_base_name, duplicate_names, parse_custom, plan_batch, plan_custom};
pub use retry::plan_retry;
pub use runner::{PlannedBatch, RunMode, RunOutcome, RunRequest, RunSettings, Runner};
pub use scheduler::Scheduler;
pub use store::ResultStore;
