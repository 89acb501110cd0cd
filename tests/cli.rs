use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_json2yaml");
    Command::new(exe)
}

fn run(path: &Path) -> Output {
    cmd()
        .arg(path)
        .env_remove("RUST_LOG")
        .output()
        .expect("run json2yaml")
}

fn convert_file(contents: &str) -> Output {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("input.json");
    fs::write(&path, contents).expect("write input");
    run(&path)
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("utf8 stdout")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn converts_file() {
    let output = convert_file(r#"{"a": 1, "b": [1, 2, 3]}"#);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "a: 1\nb:\n- 1\n- 2\n- 3\n\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn empty_collections() {
    let output = convert_file("{}");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "{}\n\n");

    let output = convert_file("[]\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[]\n\n");
}

#[test]
fn preserves_key_order_and_numbers() {
    let output = convert_file(r#"{"z": 1.0, "y": 10, "x": 2.5e3}"#);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "z: 1.0\ny: 10\nx: 2500.0\n\n");
}

#[test]
fn missing_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("missing.json");

    let output = run(&path);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = stderr(&output);
    assert!(stderr.contains("failed to read file"), "stderr: {stderr}");
    assert!(stderr.contains("missing.json"), "stderr: {stderr}");
}

#[test]
fn directory_is_not_a_file() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = run(temp.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("failed to read file"));
}

#[test]
fn invalid_json() {
    let output = convert_file("{a: 1}");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = stderr(&output);
    assert!(stderr.contains("input.json:1:2: expected object key"), "stderr: {stderr}");
}

#[test]
fn invalid_json_location() {
    let output = convert_file("{\n  \"a\": [1, 2,]\n}\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = stderr(&output);
    assert!(stderr.contains("input.json:2:13: trailing comma"), "stderr: {stderr}");
}

#[test]
fn empty_file() {
    let output = convert_file("");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_argument() {
    let output = cmd().output().expect("run json2yaml");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn debug_logging_goes_to_stderr() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("input.json");
    fs::write(&path, "[true]").expect("write input");

    let output = cmd()
        .arg(&path)
        .env("RUST_LOG", "debug")
        .output()
        .expect("run json2yaml");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "- true\n\n");
    assert!(stderr(&output).contains("read input"));
}
