//! CLI integration tests.
//!
//! Tests command-line interface functionality.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

/// Path to the built binary.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_bigo"))
}

/// Get path to test fixtures.
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn fixture_arg(name: &str) -> String {
    fixtures_path().join(name).display().to_string()
}

/// Run CLI command and return output.
fn run_cli(args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .output()
        .expect("failed to run bigo")
}

fn run_cli_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn bigo");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for bigo")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "bigo failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// =============================================================================
// Analyze
// =============================================================================

#[test]
fn test_analyze_single_file() {
    let file = fixture_arg("nested_loops.py");
    let json = stdout_json(&run_cli(&["--no-config", "analyze", &file]));
    assert_eq!(json["path"], file.as_str());
    assert_eq!(json["report"]["complexity_class"], "O(n²)");
    assert_eq!(json["report"]["best_case"], "O(1)");
    assert!(json.get("curve").is_none());
}

#[test]
fn test_analyze_with_curve() {
    let file = fixture_arg("fibonacci.py");
    let json = stdout_json(&run_cli(&["--no-config", "analyze", &file, "--curve"]));
    assert_eq!(json["report"]["complexity_class"], "O(2^n)");
    let curve = json["curve"].as_array().expect("curve array");
    assert_eq!(curve.len(), 10);
    assert_eq!(curve[9]["n"], 10);
    assert_eq!(curve[9]["operations"], 64.0);
}

#[test]
fn test_analyze_many_files_keeps_order() {
    let names = ["hello.py", "sorting.py", "factorial.py"];
    let files: Vec<String> = names.iter().map(|n| fixture_arg(n)).collect();
    let mut args = vec!["--no-config", "analyze"];
    args.extend(files.iter().map(String::as_str));

    let json = stdout_json(&run_cli(&args));
    let items = json.as_array().expect("array for several inputs");
    let classes: Vec<&str> = items
        .iter()
        .map(|i| i["report"]["complexity_class"].as_str().unwrap())
        .collect();
    assert_eq!(classes, vec!["O(1)", "O(n log n)", "O(n!)"]);
}

#[test]
fn test_analyze_stdin() {
    let output = run_cli_with_stdin(&["--no-config", "analyze"], "x=[1,2,3]\nx.sort()\n");
    let json = stdout_json(&output);
    assert_eq!(json["path"], "<stdin>");
    assert_eq!(json["report"]["complexity_class"], "O(n log n)");
}

#[test]
fn test_analyze_jsonl() {
    let files = [fixture_arg("hello.py"), fixture_arg("search.py")];
    let output = run_cli(&[
        "--no-config",
        "--format",
        "jsonl",
        "analyze",
        &files[0],
        &files[1],
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    let second: Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["report"]["complexity_class"], "O(n)");
}

#[test]
fn test_analyze_text() {
    let file = fixture_arg("sorting.py");
    let output = run_cli(&["--no-config", "--format", "text", "analyze", &file, "--curve"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Complexity: O(n log n)"));
    assert!(stdout.contains("Sort operation detected"));
    assert!(stdout.contains("Growth curve: O(n log n)"));
}

#[test]
fn test_analyze_missing_file_fails() {
    let output = run_cli(&["--no-config", "analyze", "/definitely/not/here.py"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
}

#[test]
fn test_explicit_config_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("profile.json");
    std::fs::write(&config, r#"{"profile": {"loop_keywords": ["repeat"]}}"#).unwrap();
    let config_arg = config.display().to_string();

    let output = run_cli_with_stdin(
        &["--config", &config_arg, "analyze"],
        "repeat 3 times:\n    step()\n",
    );
    let json = stdout_json(&output);
    assert_eq!(json["report"]["complexity_class"], "O(n)");
}

#[test]
fn test_each_file_uses_its_nearest_config() {
    let root = tempfile::TempDir::new().unwrap();
    let custom = root.path().join("custom");
    let plain = root.path().join("plain");
    std::fs::create_dir_all(&custom).unwrap();
    std::fs::create_dir_all(&plain).unwrap();
    std::fs::write(
        custom.join(".bigo.json"),
        r#"{"profile": {"loop_keywords": ["repeat"]}}"#,
    )
    .unwrap();

    let source = "repeat 3 times:\n    step()\n";
    let custom_file = custom.join("task.py");
    let plain_file = plain.join("task.py");
    std::fs::write(&custom_file, source).unwrap();
    std::fs::write(&plain_file, source).unwrap();

    let plain_arg = plain_file.display().to_string();
    let custom_arg = custom_file.display().to_string();
    let json = stdout_json(&run_cli(&["analyze", &plain_arg, &custom_arg]));
    let reports = json.as_array().expect("array of reports");
    assert_eq!(reports[0]["report"]["complexity_class"], "O(1)");
    assert_eq!(reports[1]["report"]["complexity_class"], "O(n)");
}

#[test]
fn test_analyze_rejects_repeated_stdin() {
    let output = run_cli(&["--no-config", "analyze", "-", "-"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("stdin"));
}

// =============================================================================
// Scan and Curve
// =============================================================================

#[test]
fn test_scan_command() {
    let file = fixture_arg("factorial.py");
    let json = stdout_json(&run_cli(&["--no-config", "scan", &file]));
    assert_eq!(json["scan"]["max_loop_nesting_depth"], 0);
    assert_eq!(json["scan"]["functions"][0]["name"], "fact");
    assert_eq!(json["scan"]["functions"][0]["params"][0], "n");
    assert_eq!(json["recursion"]["kind"], "factorial");
    assert_eq!(json["recursion"]["present"], true);
}

#[test]
fn test_curve_command_json() {
    let json = stdout_json(&run_cli(&["curve", "O(n^2)", "--compact"]));
    assert_eq!(json["class"], "O(n²)");
    assert_eq!(json["points"][9]["operations"], 100.0);
}

#[test]
fn test_curve_command_text() {
    let output = run_cli(&["--format", "text", "curve", "cubic"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Growth curve: O(n³)\n"));
    assert!(stdout.contains(" 1000 |"));
}

#[test]
fn test_curve_rejects_unknown_notation() {
    let output = run_cli(&["curve", "O(n^7)"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown complexity class"));
}
