//! Real runs against the fake tool.

use crate::prelude::*;

#[test]
fn runs_every_batch_except_test_run() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&["--config", "sweep.json"])
        .passes()
        .stdout_has("BATCH 1/2: effect_sweep")
        .stdout_has("BATCH 2/2: with_failure")
        .stdout_has("Generated 2 parameter combinations")
        .stdout_lacks("test_run")
        .stdout_has("Total: 4, successful: 3, failed: 1, timeout: 0, error: 0");

    assert_eq!(project.tool_calls().len(), 4);
    let summary = project.summary();
    assert_eq!(summary["total_analyses"], 4);
    assert_eq!(summary["successful"], 3);
    assert_eq!(summary["failed"], 1);
    assert_eq!(summary["config_file"], "sweep.json");
}

#[test]
fn job_failures_do_not_change_exit_status() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&["--config", "sweep.json", "--batch", "with_failure"])
        .passes()
        .stdout_has("failed after");

    let summary = project.summary();
    let failed = &summary["analyses"][1];
    assert_eq!(failed["name"], "fail_0.3_25_100");
    assert_eq!(failed["status"], "failed");
    assert_eq!(failed["return_code"], 2);
    assert_eq!(failed["stderr"], "analysis failed\n");
}

#[test]
fn sequential_results_keep_input_order() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&["--config", "sweep.json", "--batch", "0"])
        .passes();

    let summary = project.summary();
    let names: Vec<&str> = summary["analyses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["qa_0.2_25_100", "qa_0.3_25_100"]);
}

#[test]
fn commands_carry_required_and_output_flags() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&["--config", "sweep.json", "--test"])
        .passes();

    let calls = project.tool_calls();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert!(call.starts_with("--action=cnt --source=data.db.fz --demo=demo.csv"));
    assert!(call.contains("--variable_list=0,1,2 --voi=1"));
    assert!(call.contains("--effect_size=0.5"));
    let prefix = project.results().join("qa_0.5_25_100").join("qa_0.5_25_100");
    assert!(call.ends_with(&format!("--output={}", prefix.display())));
}

#[test]
fn large_artifact_sets_increased_flag() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&["--config", "sweep.json", "--test"])
        .passes();

    let summary = project.summary();
    let flags = &summary["analyses"][0]["artifact_flags"];
    assert_eq!(flags["increased"], true);
    assert_eq!(flags["decreased"], false);
}

#[test]
fn parallel_workers_run_everything() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&["--config", "sweep.json", "--workers", "4"])
        .passes()
        .stdout_has("Total: 4, successful: 3, failed: 1");

    assert_eq!(project.tool_calls().len(), 4);
}

#[test]
fn custom_parameters_layer_over_defaults() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&[
            "--config",
            "sweep.json",
            "--custom",
            r#"{"index_name": "iso", "permutation": [100, 200]}"#,
        ])
        .passes()
        .stdout_has("Running analysis 1/2: iso_0.3_25_100")
        .stdout_has("Running analysis 2/2: iso_0.3_25_200");

    assert_eq!(project.summary()["total_analyses"], 2);
}

#[test]
fn each_run_writes_a_log_and_a_new_summary() {
    let project = Project::with_fake_tool();

    for _ in 0..2 {
        project
            .sweep()
            .args(&["--config", "sweep.json", "--test"])
            .passes();
    }

    assert_eq!(project.summaries().len(), 2);
    assert!(!project.logs().is_empty());
    let log = std::fs::read_to_string(&project.logs()[0]).unwrap();
    assert!(log.contains("Running analysis 1/1"));
}

#[test]
fn output_flag_moves_results() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&["--config", "sweep.json", "--test", "--output", "elsewhere"])
        .passes();

    assert!(project.summaries().is_empty());
    assert!(project.path().join("elsewhere/qa_0.5_25_100").is_dir());
}

#[test]
fn slow_jobs_time_out_under_env_override() {
    let project = Project::with_fake_tool();
    project.install_tool(
        r#"#!/bin/sh
case "$1" in
  --version) echo "slow-tool 1.0"; exit 0 ;;
esac
exec sleep 5
"#,
    );

    project
        .sweep()
        .env("SWEEP_TIMEOUT_MS", "200")
        .args(&["--config", "sweep.json", "--test"])
        .passes()
        .stdout_has("Total: 1, successful: 0, failed: 0, timeout: 1, error: 0");

    let summary = project.summary();
    assert_eq!(summary["timeout"], 1);
    assert_eq!(summary["analyses"][0]["status"], "timeout");
}
