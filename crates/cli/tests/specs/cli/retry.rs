//! `--retry-failed` re-runs the failures of an earlier summary.

use crate::prelude::*;

#[test]
fn retries_only_failed_analyses() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&["--config", "sweep.json", "--batch", "with_failure"])
        .passes();
    let first = project.summaries().remove(0);
    let before = project.tool_calls().len();

    project
        .sweep()
        .args(&[
            "--config",
            "sweep.json",
            "--retry-failed",
            first.to_str().unwrap(),
        ])
        .passes()
        .stdout_has("Running analysis 1/1: fail_0.3_25_100");

    assert_eq!(project.tool_calls().len(), before + 1);
    assert_eq!(project.summaries().len(), 2);
}

#[test]
fn legacy_summary_retries_failures_not_timeouts() {
    let project = Project::with_fake_tool();
    project.file(
        "old_summary.json",
        r#"{
  "config_file": "sweep.json",
  "total_analyses": 2,
  "successful": 0,
  "failed": 1,
  "timeout": 1,
  "analyses": [
    {"name": "qa_0.2_25_100", "params": {"index_name": "qa"}, "status": "timeout",
     "command": "dsi_studio --action=cnt", "duration": 7200.0},
    {"name": "broken_one", "params": {"index_name": "qa", "effect_size": 0.4}, "status": "failed",
     "command": "dsi_studio --action=cnt --effect_size=0.4", "duration": 12.5, "return_code": 1}
  ]
}"#,
    );

    project
        .sweep()
        .args(&["--config", "sweep.json", "--retry-failed", "old_summary.json"])
        .passes()
        .stdout_has("Running analysis 1/1: broken_one");

    let calls = project.tool_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("--effect_size=0.4"));
}

#[test]
fn nothing_to_retry_still_succeeds() {
    let project = Project::with_fake_tool();
    project.file(
        "clean.json",
        r#"{"config_file": "sweep.json", "analyses": [{"name": "a", "status": "success"}]}"#,
    );

    project
        .sweep()
        .args(&["--config", "sweep.json", "--retry-failed", "clean.json"])
        .passes()
        .stdout_has("Total: 0");

    assert!(project.tool_calls().is_empty());
}

#[test]
fn missing_summary_file_fails() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&["--config", "sweep.json", "--retry-failed", "nope.json"])
        .fails();
}
