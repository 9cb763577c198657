//! Basic CLI tests.
//!
//! Tests invoke the built binary and check exit codes and output. Output is
//! captured through pipes, so the binary never sees a terminal here.

use std::process::Command;

/// Run the CLI and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_polygo"))
        .args(args)
        .env("POLYGO_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_version() {
    let (stdout, _, code) = run_cli(&["--version"]);
    assert_eq!(code, 0, "--version failed");
    assert!(stdout.contains("polygo"));
}

#[test]
fn test_help() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0, "--help failed");
    assert!(stdout.contains("brainstorming"));
}

#[test]
fn test_rejects_unknown_arguments() {
    let (_, stderr, code) = run_cli(&["--minutes", "5"]);
    assert_ne!(code, 0);
    assert!(!stderr.is_empty());
}

#[test]
fn test_non_interactive_terminal_fails() {
    let (_, stderr, code) = run_cli(&[]);
    assert_eq!(code, 1, "expected startup failure without a terminal");
    assert!(stderr.contains("interactive terminal"));
}
