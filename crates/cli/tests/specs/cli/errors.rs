//! Fatal errors exit non-zero before any job runs.

use crate::prelude::*;

#[test]
fn missing_config_fails() {
    let project = Project::empty();

    project
        .sweep()
        .args(&["--config", "absent.json"])
        .fails()
        .code(1)
        .stderr_has("failed to load configuration absent.json");
}

#[test]
fn malformed_config_fails() {
    let project = Project::empty();
    project.file("sweep.json", "{ not json");

    project
        .sweep()
        .args(&["--config", "sweep.json"])
        .fails()
        .stderr_has("JSON parse error");
}

#[test]
fn out_of_range_batch_index_fails() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&["--config", "sweep.json", "--batch", "9"])
        .fails()
        .code(3)
        .stderr_has("invalid batch index: 9");

    assert!(project.tool_calls().is_empty());
    assert!(project.summaries().is_empty());
}

#[test]
fn missing_test_run_batch_fails() {
    let project = Project::with_fake_tool();
    let tool = project.path().join("bin/tool");
    project.file(
        "sweep.json",
        &format!(
            r#"{{"tool_cmd": "{}", "batch_configurations": [{{"name": "only"}}]}}"#,
            tool.display()
        ),
    );

    project
        .sweep()
        .args(&["--config", "sweep.json", "--test"])
        .fails()
        .stderr_has("no batch named 'test_run'");
}

#[test]
fn unavailable_tool_aborts_without_summary() {
    let project = Project::empty();
    project.file("sweep.json", &sweep_config(&project.path().join("missing-tool")));

    project
        .sweep()
        .args(&["--config", "sweep.json"])
        .fails()
        .code(4)
        .stderr_has("tool not available");

    assert!(project.summaries().is_empty());
}

#[test]
fn failing_health_check_is_tolerated_for_executable_tool() {
    let project = Project::empty();
    let tool = project.install_tool("#!/bin/sh\nexit 1\n");
    project.file("sweep.json", &sweep_config(&tool));

    project
        .sweep()
        .args(&["--config", "sweep.json", "--test"])
        .passes()
        .stdout_has("Total: 1, successful: 0, failed: 1");
}

#[test]
fn malformed_custom_json_fails() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&["--config", "sweep.json", "--custom", "[1, 2"])
        .fails()
        .stderr_has("invalid custom parameters");
}

#[test]
fn zero_workers_is_a_usage_error() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&["--config", "sweep.json", "--workers", "0"])
        .fails()
        .code(2);
}

#[test]
fn oversized_grid_fails_before_any_job() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&[
            "--config",
            "sweep.json",
            "--dry-run",
            "--custom",
            r#"{"effect_size": "0:0.00001:0.99999", "permutation": "1:1000"}"#,
        ])
        .fails()
        .code(1)
        .stderr_has("combinations (limit 100000)");

    assert!(project.tool_calls().is_empty());
}
