#![cfg(feature = "cli")]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const BUTTONS: &str = "QPushButton{background-color:#FFFFFF}\nQPushButton:hover { background-color: #E6F0FC; color: rgba(0, 0, 0, 1.0); }\n";

fn qstyle(args: &[&str], file: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qstyle"))
        .args(args.iter().take(1))
        .arg(file)
        .args(args.iter().skip(1))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn sheet_file(dir: &tempfile::TempDir, source: &str) -> PathBuf {
    let path = dir.path().join("buttons.qss");
    std::fs::write(&path, source).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_check_reports_rule_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = sheet_file(&dir, BUTTONS);

    let output = qstyle(&["check"], &path);
    assert!(output.status.success());
    assert!(stdout(&output).contains(": 2 rules"), "{}", stdout(&output));
}

#[test]
fn test_check_fails_on_unclosed_block() {
    let dir = tempfile::tempdir().unwrap();
    let path = sheet_file(&dir, "QMenu { color: red; }\nQPushButton {\n    color: blue;\n");

    let output = qstyle(&["check"], &path);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("buttons.qss:2:13:"), "{}", out);
    assert!(out.contains("'{'"), "{}", out);
}

#[test]
fn test_check_fails_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = qstyle(&["check"], &dir.path().join("absent.qss"));
    assert!(!output.status.success());
}

#[test]
fn test_fmt_prints_canonical_form() {
    let dir = tempfile::tempdir().unwrap();
    let path = sheet_file(&dir, BUTTONS);

    let output = qstyle(&["fmt"], &path);
    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out, qstyle::load(BUTTONS).unwrap().to_qss());
    assert!(out.contains("    background-color: #FFFFFF;\n"), "{}", out);
    assert!(out.contains("color: rgba(0, 0, 0, 1);"), "{}", out);

    // formatting is a fixed point
    let formatted = sheet_file(&dir, &out);
    assert_eq!(stdout(&qstyle(&["fmt"], &formatted)), out);
}

#[test]
fn test_fmt_fails_on_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = sheet_file(&dir, "QLabel { color: }");

    let output = qstyle(&["fmt"], &path);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load"));
}

#[test]
fn test_lookup_hover_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = sheet_file(&dir, BUTTONS);

    let output = qstyle(&["lookup", "QPushButton", "--state", "hover", "--json"], &path);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["background-color"], "#E6F0FC");
    assert_eq!(json["color"], "rgba(0, 0, 0, 1)");

    let output = qstyle(&["lookup", "QPushButton", "--json"], &path);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["background-color"], "#FFFFFF");
    assert!(json.get("color").is_none());
}

#[test]
fn test_lookup_without_match() {
    let dir = tempfile::tempdir().unwrap();
    let path = sheet_file(&dir, BUTTONS);

    let output = qstyle(&["lookup", "QLabel"], &path);
    assert!(output.status.success());
    assert!(stdout(&output).contains("(no matching rules)"));
}
