use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const ENV_VARS: [&str; 9] = [
    "SECURITY_AND_COMPLIANCE_CENTER_API_URL",
    "SECURITY_AND_COMPLIANCE_CENTER_API_AUTH_TYPE",
    "SECURITY_AND_COMPLIANCE_CENTER_API_USERNAME",
    "SECURITY_AND_COMPLIANCE_CENTER_API_PASSWORD",
    "SECURITY_AND_COMPLIANCE_CENTER_API_BEARER_TOKEN",
    "SECURITY_AND_COMPLIANCE_CENTER_API_ENABLE_RETRIES",
    "SECURITY_AND_COMPLIANCE_CENTER_API_MAX_RETRIES",
    "SECURITY_AND_COMPLIANCE_CENTER_API_RETRY_INTERVAL",
    "SECURITY_AND_COMPLIANCE_CENTER_API_DISABLE_SSL",
];

/// `sccop` with a clean environment: no service variables, no colors.
fn sccop() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sccop"));
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("SCCOP_CONFIG")
        .env_remove("SCCOP_FORMAT")
        .env_remove("SCCOP_SERVICE_URL")
        .env("NO_COLOR", "1");
    cmd
}

fn write_config(dir: &Path, service_url: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    let contents = format!(
        "service_url: {service_url}\nauth:\n  type: bearertoken\n  bearer_token: test-token\npreferences:\n  page_size: 25\n"
    );
    fs::write(&path, contents).expect("failed to write config");
    path
}

#[test]
fn help_lists_resource_commands() {
    sccop()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("control-library"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("provider-type"));
}

#[test]
fn completion_generates_bash_script() {
    sccop()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sccop"));
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "https://scc.example.test");

    let assert = sccop()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));
    assert!(stdout.contains("Service URL: https://scc.example.test"));
    assert!(stdout.contains("Authentication: bearerToken"));
    assert!(stdout.contains("Retries disabled"));

    Ok(())
}

#[test]
fn status_prefers_service_url_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "https://scc.example.test");

    sccop()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .arg("--service-url")
        .arg("https://override.example.test")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Service URL: https://override.example.test",
        ));

    Ok(())
}

#[test]
fn status_without_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let missing = temp.path().join("missing.yaml");

    sccop()
        .arg("status")
        .arg("--config")
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("No config file"))
        .stdout(predicate::str::contains("Authentication not configured"));

    Ok(())
}

#[test]
fn list_without_credentials_shows_helpful_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let missing = temp.path().join("missing.yaml");

    sccop()
        .args(["profile", "list", "--config"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("sccop init"));

    Ok(())
}

#[test]
fn malformed_config_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let path = temp.path().join("config.yaml");
    fs::write(&path, "auth: [not: valid")?;

    sccop()
        .args(["profile", "list", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration"));

    Ok(())
}

#[test]
fn control_library_list_against_mock_service() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _libraries = server
        .mock("GET", "/control_libraries")
        .match_query(mockito::Matcher::UrlEncoded("limit".into(), "25".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "limit": 25,
                "total_count": 1,
                "control_libraries": [
                    {"id": "lib-1", "control_library_name": "IBM Cloud Framework", "control_library_type": "predefined"}
                ]
            }"#,
        )
        .create();

    let temp = tempdir()?;
    let config_path = temp.path().join("missing.yaml");

    let assert = sccop()
        .args(["control-library", "list", "--limit", "25", "--format", "json"])
        .arg("--config")
        .arg(&config_path)
        .arg("--service-url")
        .arg(server.url())
        .env("SECURITY_AND_COMPLIANCE_CENTER_API_AUTH_TYPE", "noauth")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("lib-1"));
    assert!(stdout.contains("IBM Cloud Framework"));
    assert!(stdout.contains("\"meta\""));

    Ok(())
}

#[test]
fn report_download_writes_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _download = server
        .mock("GET", "/reports/rep-1/download")
        .with_status(200)
        .with_header("content-type", "application/csv")
        .with_body("Control,Status\nAC-1,compliant\n")
        .create();

    let temp = tempdir()?;
    let out = temp.path().join("report.csv");

    sccop()
        .args(["report", "download", "rep-1", "--output"])
        .arg(&out)
        .arg("--config")
        .arg(temp.path().join("missing.yaml"))
        .arg("--service-url")
        .arg(server.url())
        .env("SECURITY_AND_COMPLIANCE_CENTER_API_AUTH_TYPE", "noauth")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(out)?, "Control,Status\nAC-1,compliant\n");
    Ok(())
}

#[test]
fn service_errors_exit_nonzero() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _missing = server
        .mock("GET", "/profiles/nope")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errors": [{"code": "not_found", "message": "Profile not found"}]}"#)
        .create();

    let temp = tempdir()?;

    sccop()
        .args(["profile", "get", "nope"])
        .arg("--config")
        .arg(temp.path().join("missing.yaml"))
        .arg("--service-url")
        .arg(server.url())
        .env("SECURITY_AND_COMPLIANCE_CENTER_API_AUTH_TYPE", "noauth")
        .assert()
        .failure()
        .stderr(predicate::str::contains("404 Profile not found"));

    Ok(())
}
