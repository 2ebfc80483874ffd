//! Tests that run the built `synth-csv` binary.

use std::process::{Command, Output};
use tempfile::TempDir;

/// Execute the synth-csv binary with `args` and return its output
fn execute_synth_csv(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_synth-csv"))
        .args(args)
        .env("RUST_LOG", "synth_populate_csv=debug,info")
        .env_remove("SYNTH_CSV_COLUMNS")
        .env_remove("SYNTH_CSV_OUTPUT")
        .output()
        .expect("Failed to run synth-csv")
}

fn assert_cli_success(output: &Output, command_desc: &str) {
    if !output.status.success() {
        panic!(
            "{} failed!\nExit code: {:?}\nStdout: {}\nStderr: {}",
            command_desc,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

#[test]
fn test_csv_on_stdout_logs_on_stderr() {
    let output = execute_synth_csv(&[
        "--schema",
        "tests/fixtures/bonus_schema.json",
        "--rows",
        "3",
        "--columns",
        "id,bonus",
        "--seed",
        "1",
    ]);
    assert_cli_success(&output, "stdout run");

    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "id,bonus\n0,0.00\n1,1.00\n2,2.00\n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CSV generation complete"), "stderr: {stderr}");
}

#[test]
fn test_output_file_leaves_stdout_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.csv");

    let output = execute_synth_csv(&[
        "--schema",
        "tests/fixtures/bonus_schema.json",
        "--rows",
        "2",
        "--columns",
        "id",
        "-o",
        path.to_str().unwrap(),
    ]);
    assert_cli_success(&output, "file run");

    assert!(output.stdout.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "id\n0\n1\n");
}

#[test]
fn test_missing_schema_exits_with_error() {
    let output = execute_synth_csv(&["--schema", "tests/fixtures/does_not_exist.json"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Failed to load schema"),
        "stderr: {stderr}"
    );
}
