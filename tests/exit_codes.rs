//! Tests for the binary's exit codes and output destinations.

use std::process::Output;

use tempfile::TempDir;
use tokio::process::Command;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_header_audit"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("Failed to run header_audit binary")
}

async fn start_server() -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Strict-Transport-Security", "max-age=31536000")
                .insert_header("X-Content-Type-Options", "nosniff"),
        )
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test(flavor = "multi_thread")]
async fn test_report_on_stdout_exits_zero() {
    let server = start_server().await;
    let url = server.uri();

    let output = run_binary(&[url.as_str(), "--quiet"]).await;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["url"], url.as_str());
    assert_eq!(value["status"], 200);
    assert_eq!(value["findings"]["strict-transport-security"], "present");
    assert_eq!(value["findings"]["content-security-policy"], "missing");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_report_written_to_file() {
    let server = start_server().await;
    let url = server.uri();
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("report.json");
    let path_str = path.to_str().unwrap();

    let output = run_binary(&["--url", url.as_str(), "--json-out", path_str, "--quiet"]).await;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty(), "nothing on stdout when writing to a file");
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["findings"]["x-content-type-options"], "present");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_authorized_use_notice_on_stderr() {
    let server = start_server().await;
    let url = server.uri();

    let output = run_binary(&[url.as_str()]).await;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Authorized use only"));
    // stdout still parses as a single JSON document
    assert!(serde_json::from_slice::<serde_json::Value>(&output.stdout).is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_url_exits_two() {
    let output = run_binary(&[]).await;
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unsupported_scheme_exits_two() {
    let output = run_binary(&["file:///etc/passwd", "--quiet"]).await;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported URL scheme"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_failure_exits_one_without_report() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let url = format!("http://127.0.0.1:{port}/");

    let output = run_binary(&[url.as_str(), "--quiet", "--timeout", "1"]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "no partial report on fetch failure");
    assert!(String::from_utf8_lossy(&output.stderr).contains("header_audit error"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unwritable_output_exits_three() {
    let server = start_server().await;
    let url = server.uri();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("report.json");

    let output = run_binary(&[url.as_str(), "-o", path.to_str().unwrap(), "--quiet"]).await;

    assert_eq!(output.status.code(), Some(3));
}
