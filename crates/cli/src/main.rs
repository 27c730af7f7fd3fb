// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sweep - parameter-sweep batch runner

mod exit_error;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use exit_error::{ExitError, EXIT_INTERRUPTED};
use std::path::PathBuf;
use sweep_adapters::{detect_display_wrapper, LogReporter, SystemToolRunner, TracedTool};
use sweep_config::{load_config, BatchSelector, TEST_BATCH};
use sweep_core::{Clock, SystemClock};
use sweep_engine::{parse_custom, BatchError, RunMode, RunOutcome, RunRequest, RunSettings, Runner};

const EXAMPLES: &str = "\
Examples:
  # Run every batch except test_run
  sweep --config sweep_config.json

  # Run one batch by index or by name, four at a time
  sweep --config sweep_config.json --batch 0 --workers 4
  sweep --config sweep_config.json --batch qa_effect_sizes

  # Run one ad-hoc parameter set over the defaults
  sweep --config sweep_config.json --custom '{\"index_name\":\"qa\",\"effect_size\":0.3}'

  # Re-run the failures of an earlier run
  sweep --config sweep_config.json --retry-failed sweep_results/analysis_summary_20260101_120000.json";

#[derive(Parser, Debug)]
#[command(
    name = "sweep",
    version,
    about = "Run parameter sweeps of an external analysis tool",
    after_help = EXAMPLES
)]
struct Cli {
    /// Configuration file (.json, .toml or .hcl)
    #[arg(long, value_name = "FILE")]
    config: PathBuf,

    /// Output directory for results
    #[arg(long, value_name = "DIR", default_value = "./sweep_results")]
    output: PathBuf,

    /// Run only one batch, by 0-based index or by name
    #[arg(long, value_name = "N|NAME")]
    batch: Option<BatchSelector>,

    /// Run only the "test_run" batch
    #[arg(long)]
    test: bool,

    /// Number of analyses to run at once
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    workers: u32,

    /// Run one analysis set from a JSON object of parameters
    #[arg(long, value_name = "JSON")]
    custom: Option<String>,

    /// Retry the failed analyses listed in a summary file
    #[arg(long = "retry-failed", value_name = "SUMMARY")]
    retry_failed: Option<PathBuf>,

    /// Show the commands that would run without running them
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Which jobs to run. Precedence: custom, retry, test, batch, all.
    fn mode(&self) -> Result<RunMode, BatchError> {
        if let Some(json) = &self.custom {
            return Ok(RunMode::Custom(parse_custom(json)?));
        }
        if let Some(path) = &self.retry_failed {
            return Ok(RunMode::Retry(path.clone()));
        }
        if self.test {
            return Ok(RunMode::Batches(BatchSelector::Name(TEST_BATCH.to_string())));
        }
        Ok(RunMode::Batches(self.batch.clone().unwrap_or_default()))
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain. Otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let mode = cli.mode().map_err(exit_error::from_batch_error)?;
    let clock = SystemClock;
    let output_dir = std::path::absolute(&cli.output)
        .with_context(|| format!("invalid output directory {}", cli.output.display()))?;

    // Dry runs leave the output directory untouched
    let log_file = (!cli.dry_run).then(|| logging::log_path(&output_dir, clock.now()));
    let _guard = logging::setup_logging(log_file.as_deref())?;

    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load configuration {}", cli.config.display()))?;

    tracing::info!(
        config = %cli.config.display(),
        output = %output_dir.display(),
        workers = cli.workers,
        "initialized batch runner"
    );
    if cli.dry_run {
        tracing::info!("dry run: commands will be shown but not executed");
    }

    let settings = RunSettings::from_config(&config.scheduler)
        .with_env_overrides()
        .with_wrapper(detect_display_wrapper());
    if let (true, Some(wrapper)) = (config.scheduler.display_wrapper, &settings.wrapper) {
        tracing::info!(wrapper = %wrapper.join(" "), "no display detected, using virtual display");
    }

    let runner = Runner::new(
        TracedTool::new(SystemToolRunner::new()),
        LogReporter::new(),
        clock,
        settings,
    );
    let request = RunRequest {
        config_file: cli.config.display().to_string(),
        output_dir,
        workers: cli.workers as usize,
        mode,
        dry_run: cli.dry_run,
    };

    let outcome = tokio::select! {
        outcome = runner.run(&config, &request) => outcome.map_err(exit_error::from_batch_error)?,
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::warn!("interrupted, no summary written");
            return Err(ExitError::new(EXIT_INTERRUPTED, "interrupted".to_string()).into());
        }
    };

    if let RunOutcome::DryRun(planned) = outcome {
        print!("{}", output::format_plan(&planned));
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
