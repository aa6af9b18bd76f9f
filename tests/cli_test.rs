//! End-to-end tests running the recase binary

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use recase::{read_documents, Data, DocumentFormat};
use serde_json::json;

fn recase() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_recase"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_converts_yaml_file_keys_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("settings.yaml");
    let output = dir.path().join("out.yaml");
    fs::write(&input, "maxRetries: 3\nlogLevel: debugMode\n").unwrap();

    let result = recase()
        .args(["data", "-f", "camel", "-t", "snake", "-k", "-o"])
        .arg(&output)
        .arg(&input)
        .output()
        .unwrap();

    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    assert!(result.stdout.is_empty());

    // Format comes from the .yaml extension; values are left alone.
    let written = fs::read_to_string(&output).unwrap();
    let documents = read_documents(written.as_bytes(), DocumentFormat::Yaml).unwrap();
    assert_eq!(
        documents,
        vec![Data::from(json!({"max_retries": 3, "log_level": "debugMode"}))]
    );
}

#[test]
fn test_reads_json_from_stdin_by_default() {
    let mut child = recase()
        .args(["data", "--from", "snake", "--to", "kebab", "--keys", "--values", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"user_name": "first_admin", "ids": [1, 2]}"#)
        .unwrap();
    let result = child.wait_with_output().unwrap();

    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    let stdout = String::from_utf8(result.stdout).unwrap();
    assert_eq!(stdout, "{\"user-name\":\"first-admin\",\"ids\":[1,2]}\n");
}

#[test]
fn test_explicit_format_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("events.txt");
    fs::write(&input, "{\"eventType\": \"a\"}\n{\"eventType\": \"b\"}\n").unwrap();

    let result = recase()
        .args(["data", "-f", "camel", "-t", "kebab", "-k", "--format", "ndjson"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(result.status.success());
    assert_eq!(
        String::from_utf8(result.stdout).unwrap(),
        "{\"event-type\":\"a\"}\n{\"event-type\":\"b\"}\n"
    );
}

#[test]
fn test_empty_yaml_file_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.yml");
    fs::write(&input, "").unwrap();

    let result = recase()
        .args(["data", "-f", "camel", "-t", "snake", "-k"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(result.status.success());
    assert!(result.stdout.is_empty());
}

#[test]
fn test_missing_input_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.json");

    let result = recase()
        .args(["data", "-f", "camel", "-t", "snake", "-k"])
        .arg(&missing)
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Error: Failed to open"), "stderr: {}", stderr);
    assert!(stderr.contains("does-not-exist.json"));
}

#[test]
fn test_text_command_converts_each_argument() {
    let result = recase()
        .args(["text", "--from", "kebab", "--to", "camel", "content-type", "x-request-id"])
        .output()
        .unwrap();

    assert!(result.status.success());
    assert_eq!(String::from_utf8(result.stdout).unwrap(), "contentType\nxRequestId\n");
}
