//! End-to-end tests for the pr-creator binary
//!
//! A fake `gh` script records the arguments it receives, which also tells
//! whether a subprocess was spawned at all.

#![cfg(unix)]

use std::path::Path;
use std::process::{Command, Output};

use gh_common::testing::FakeGh;
use tempfile::tempdir;

fn pr_creator(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pr-creator"))
        .args(args)
        .env("GH_TOOLS_CONFIG", config)
        .env_remove("RUST_LOG")
        .env_remove("LOG_FORMAT")
        .output()
        .expect("run pr-creator")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn missing_body_fails_before_spawn() {
    let fake = FakeGh::new().stdout("https://github.com/owner/repo/pull/1\n");
    let config = fake.write_config("");

    let output = pr_creator(&config, &["--title", "Fix"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(fake.recorded_args().is_none());
}

#[test]
fn both_body_sources_fail_before_spawn() {
    let fake = FakeGh::new();
    let config = fake.write_config("");

    let output = pr_creator(
        &config,
        &["--title", "Fix", "--body", "x", "--body-file", "pr.md"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(fake.recorded_args().is_none());
}

#[test]
fn empty_body_fails_before_spawn() {
    let fake = FakeGh::new();
    let config = fake.write_config("");

    let output = pr_creator(&config, &["--title", "Fix", "--body", ""]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("body must not be empty"));
    assert!(fake.recorded_args().is_none());
}

#[test]
fn unreadable_body_file_fails_before_spawn() {
    let fake = FakeGh::new();
    let config = fake.write_config("");
    let missing = fake.dir().join("missing.md");

    let output = pr_creator(
        &config,
        &["--title", "Fix", "--body-file", &missing.to_string_lossy()],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("missing.md"));
    assert!(fake.recorded_args().is_none());
}

#[test]
fn success_relays_gh_output() {
    let fake = FakeGh::new().stdout("https://github.com/owner/repo/pull/7\n");
    let config = fake.write_config("");

    let output = pr_creator(&config, &["--title", "Fix", "--body", "Details"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Creating PR: Fix"));
    assert!(out.contains("Base branch: main"));
    assert!(!out.contains("Head branch"));
    assert!(out.ends_with("PR created successfully!\nhttps://github.com/owner/repo/pull/7\n"));

    assert_eq!(
        fake.recorded_args().unwrap(),
        vec!["pr", "create", "--title", "Fix", "--body", "Details", "--base", "main"]
    );
}

#[test]
fn body_file_head_and_draft_are_forwarded() {
    let fake = FakeGh::new().stdout("https://github.com/owner/repo/pull/8\n");
    let config = fake.write_config("");
    let dir = tempdir().unwrap();
    let body = dir.path().join("pr.md");
    std::fs::write(&body, "## Summary\n\nFixes #123\n").unwrap();

    let output = pr_creator(
        &config,
        &[
            "--title",
            "Fix login",
            "--body-file",
            &body.to_string_lossy(),
            "--base",
            "develop",
            "--head",
            "fix/issue-123",
            "--draft",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Type: draft"));

    assert_eq!(
        fake.recorded_args().unwrap(),
        vec![
            "pr",
            "create",
            "--title",
            "Fix login",
            "--body",
            "## Summary\n\nFixes #123\n",
            "--base",
            "develop",
            "--head",
            "fix/issue-123",
            "--draft",
        ]
    );
}

#[test]
fn gh_failure_relays_stderr() {
    let fake = FakeGh::new()
        .stderr("pull request create failed: GraphQL: No commits between main and fix\n")
        .exit_code(1);
    let config = fake.write_config("");

    let output = pr_creator(&config, &["--title", "Fix", "--body", "Details"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output)
        .contains("PR creation failed: pull request create failed: GraphQL: No commits between main and fix"));
}
