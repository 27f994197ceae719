//! Integration tests for CLI functionality

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Command for the compiled binary, isolated from the caller's AWX env
fn awxctl() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("awxctl"));
    cmd.env_remove("AWX_HOST").env_remove("AWX_TOKEN");
    cmd
}

/// Run the binary off the async runtime and return its output
async fn run_awxctl(args: Vec<String>) -> std::process::Output {
    tokio::task::spawn_blocking(move || awxctl().args(&args).output().unwrap())
        .await
        .unwrap()
}

#[test]
fn test_help_flag() {
    awxctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Explore AWX organizations"));
}

#[test]
fn test_version_flag() {
    awxctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("awxctl"));
}

#[test]
fn test_get_help_lists_resources() {
    awxctl()
        .args(["get", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("org-resource"))
        .stdout(predicate::str::contains("user-token"));
}

#[test]
fn test_missing_host_fails() {
    awxctl()
        .args(["get", "org"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("AWX host is required"));
}

#[test]
fn test_invalid_relation_fails() {
    awxctl()
        .args(["get", "org-resource", "widgets", "--org", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_invalid_output_format_fails() {
    awxctl()
        .args(["get", "token", "-o", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_org_resource_walks_pages_and_reports_failed_org() {
    let mock_server = MockServer::start().await;
    let next = format!("{}/api/v2/organizations/1/teams/?page=2", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/1/teams/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [{"id": 11, "name": "ops"}]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/1/teams/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 2,
            "next": next,
            "previous": null,
            "results": [{"id": 10, "name": "devs"}]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/2/teams/"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"detail": "Not found."})),
        )
        .mount(&mock_server)
        .await;

    let output = run_awxctl(vec![
        "get".into(),
        "org-resource".into(),
        "teams".into(),
        "--org".into(),
        "1,2".into(),
        "-o".into(),
        "json".into(),
        "--batch".into(),
        "--host".into(),
        mock_server.uri(),
    ])
    .await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let teams: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(teams.as_array().unwrap().len(), 2);
    assert_eq!(teams[0]["name"], "devs");
    assert_eq!(teams[1]["name"], "ops");
    assert_eq!(teams[1]["parent_id"], 1);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error fetching teams for 2"));
    assert!(stderr.contains("Not found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_associate_posts_link_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/organizations/1/admins/"))
        .and(body_json(serde_json::json!({"id": 7, "associate": true})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = run_awxctl(vec![
        "associate".into(),
        "organizations".into(),
        "1".into(),
        "admins".into(),
        "7".into(),
        "--batch".into(),
        "--host".into(),
        mock_server.uri(),
    ])
    .await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Associated admins 7 with organizations 1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_error_exits_non_zero() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/roles/99/"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(
                serde_json::json!({"detail": "You do not have permission to perform this action."}),
            ),
        )
        .mount(&mock_server)
        .await;

    let output = run_awxctl(vec![
        "get".into(),
        "role".into(),
        "99".into(),
        "--batch".into(),
        "--host".into(),
        mock_server.uri(),
    ])
    .await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("You do not have permission"));
}
