//! Binary tests: run `reqflow` in a scratch directory

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

mod common;

use assert_cmd::Command;
use common::{requirements_workbook, write_workbook, Text};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn reqflow(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("reqflow").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("REQFLOW_INPUT")
        .env_remove("REQFLOW_OUTPUT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

// ═══════════════════════════════════════════════════════════════════════════
// DEFAULT / SCREENS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_no_args_runs_screens() {
    let dir = TempDir::new().unwrap();
    requirements_workbook(dir.path());

    reqflow(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 5 unique screens:"))
        .stdout(predicate::str::contains("  1. User Authentication System"))
        .stdout(predicate::str::contains(
            "- Input file: ./docs/Requirment Document .xlsx",
        ))
        .stdout(predicate::str::contains("user-flow-diagram.html"));

    let out = dir.path().join("docs/flow-diagrams");
    assert!(out.join("user-flow-diagram.mmd").exists());
    assert!(out.join("user-flow-diagram.html").exists());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 2);
}

#[test]
fn test_missing_input_exits_zero_without_output() {
    let dir = TempDir::new().unwrap();

    reqflow(&dir)
        .arg("screens")
        .assert()
        .success()
        .stdout(predicate::str::contains("Excel file not found."))
        .stdout(predicate::str::contains("Documentss/Requirment Document .xlsx"));

    assert!(!dir.path().join("docs/flow-diagrams").exists());
}

#[test]
fn test_corrupt_input_exits_zero_without_output() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/Requirment Document .xlsx"), "garbage").unwrap();

    reqflow(&dir)
        .arg("sheets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to read Excel file."));

    assert!(!dir.path().join("docs/flow-diagrams").exists());
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    requirements_workbook(dir.path());
    let mmd = dir.path().join("docs/flow-diagrams/user-flow-diagram.mmd");
    let html = dir.path().join("docs/flow-diagrams/user-flow-diagram.html");

    reqflow(&dir).assert().success();
    let (mmd1, html1) = (fs::read(&mmd).unwrap(), fs::read(&html).unwrap());

    reqflow(&dir).assert().success();
    assert_eq!(mmd1, fs::read(&mmd).unwrap());
    assert_eq!(html1, fs::read(&html).unwrap());
}

// ═══════════════════════════════════════════════════════════════════════════
// SHEETS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_sheets_writes_flow_diagram() {
    let dir = TempDir::new().unwrap();
    requirements_workbook(dir.path());

    reqflow(&dir)
        .args(["sheets", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 sheet(s)"))
        .stdout(predicate::str::contains("Rows: 8, Columns: 3"))
        .stdout(predicate::str::contains("flow-diagram.mmd"));

    let mmd = fs::read_to_string(dir.path().join("docs/flow-diagrams/flow-diagram.mmd")).unwrap();
    assert!(mmd.starts_with("```mermaid\n"));
    assert!(mmd.contains("subgraph Navigation[\"Navigation\"]"));
    assert!(mmd.contains("Login --> Dashboard"));
}

#[test]
fn test_sheets_reports_collision() {
    let dir = TempDir::new().unwrap();
    write_workbook(
        &dir.path().join("docs/Requirement Document.xlsx"),
        &[(
            "Flows",
            vec![
                vec![Text("From"), Text("To")],
                vec![Text("Stock In"), Text("Stock-In")],
            ],
        )],
    );

    reqflow(&dir)
        .arg("sheets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Node id collision"))
        .stdout(predicate::str::contains("Stock_In"));
}

// ═══════════════════════════════════════════════════════════════════════════
// OPTIONS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_explicit_input_and_output_dir() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(
        &dir.path().join("reqs.xlsx"),
        &[(
            "Requirment Document",
            vec![vec![Text("Screen Name")], vec![Text("Sales Management")]],
        )],
    );

    reqflow(&dir)
        .args(["screens", "-i"])
        .arg(&input)
        .args(["-o", "site"])
        .assert()
        .success();

    let mmd = fs::read_to_string(dir.path().join("site/user-flow-diagram.mmd")).unwrap();
    assert!(mmd.contains("Dashboard --> Sales_Management"));
    assert!(mmd.contains("Sales_Management --> Reports"));
}

#[test]
fn test_env_input() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(
        &dir.path().join("from-env.xlsx"),
        &[("Sheet1", vec![vec![Text("A"), Text("B")], vec![Text("x"), Text("y")]])],
    );

    reqflow(&dir)
        .arg("sheets")
        .env("REQFLOW_INPUT", &input)
        .assert()
        .success();

    assert!(dir.path().join("docs/flow-diagrams/flow-diagram.html").exists());
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    reqflow(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("screens"))
        .stdout(predicate::str::contains("sheets"));
}
