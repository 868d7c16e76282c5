//! Integration tests driving the menu through piped stdin.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Host layout with two shared .NET runtimes installed.
fn setup_host() -> TempDir {
    let temp = TempDir::new().unwrap();
    let shared = temp
        .path()
        .join("pf")
        .join("dotnet")
        .join("shared")
        .join("Microsoft.NETCore.App");
    fs::create_dir_all(shared.join("6.0.28")).unwrap();
    fs::create_dir_all(shared.join("8.0.1")).unwrap();
    fs::create_dir_all(temp.path().join("tmp")).unwrap();
    temp
}

fn audit(host: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("dotnet-audit"));
    cmd.current_dir(host)
        .env("ProgramFiles", host.join("pf"))
        .env("TEMP", host.join("tmp"))
        .env("COMPUTERNAME", "HOST1")
        .env("HOME", host.join("home"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("DOTNET_AUDIT_TRACKER_URL")
        .env_remove("DOTNET_AUDIT_INSTALLER_URL");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("dotnet-audit"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("end-of-support"))
        .stdout(predicate::str::contains("--csv-path"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("dotnet-audit"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_subcommands() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("dotnet-audit"));
    cmd.arg("scan");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn exit_choice_ends_session() -> Result<(), Box<dyn std::error::Error>> {
    let host = setup_host();
    audit(host.path())
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Scan installed .NET versions"))
        .stdout(predicate::str::contains("5. Exit"));
    Ok(())
}

#[test]
fn invalid_choice_redisplays_menu() -> Result<(), Box<dyn std::error::Error>> {
    let host = setup_host();
    let assert = audit(host.path()).write_stdin("9\nabc\n5\n").assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert_eq!(
        stdout
            .matches("Invalid selection, please choose 1-5.")
            .count(),
        2
    );
    assert_eq!(stdout.matches("4. Install latest .NET").count(), 3);
    Ok(())
}

#[test]
fn end_of_input_exits_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    let host = setup_host();
    audit(host.path()).write_stdin("").assert().success();
    Ok(())
}

#[test]
fn scan_lists_versions_with_eol_marker() -> Result<(), Box<dyn std::error::Error>> {
    let host = setup_host();
    audit(host.path())
        .write_stdin("1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Core: Microsoft.NETCore.App - 6.0.28 [EOL]",
        ))
        .stdout(predicate::str::contains("Core: Microsoft.NETCore.App - 8.0.1"));
    Ok(())
}

#[test]
fn scan_with_nothing_installed() -> Result<(), Box<dyn std::error::Error>> {
    let host = TempDir::new()?;
    audit(host.path())
        .write_stdin("1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No .NET versions found."));
    Ok(())
}

#[test]
fn log_writes_csv() -> Result<(), Box<dyn std::error::Error>> {
    let host = setup_host();
    let csv = host.path().join("inventory.csv");

    audit(host.path())
        .arg("--csv-path")
        .arg(&csv)
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged 2 version(s)"));

    let content = fs::read_to_string(&csv)?;
    assert_eq!(
        content,
        "Name,Version\nCore: Microsoft.NETCore.App,6.0.28\nCore: Microsoft.NETCore.App,8.0.1\n"
    );
    Ok(())
}

#[test]
fn log_defaults_to_working_directory() -> Result<(), Box<dyn std::error::Error>> {
    let host = setup_host();
    audit(host.path()).write_stdin("2\n5\n").assert().success();
    assert!(host.path().join("dotnet_versions.csv").exists());
    Ok(())
}

#[test]
fn ticket_is_created_and_id_printed() -> Result<(), Box<dyn std::error::Error>> {
    let host = setup_host();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .query_param("api-version", "6.0")
            .header("content-type", "application/json-patch+json")
            .body_includes("Upgrade .NET on HOST1 (EOL installed: 6.0.28");
        then.status(200).json_body(json!({"id": 4242}));
    });

    audit(host.path())
        .env("DOTNET_AUDIT_TRACKER_URL", server.base_url())
        .write_stdin("3\ncontoso\nPlatform\nsecret\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created work item #4242"));

    mock.assert();
    Ok(())
}

#[test]
fn blank_ticket_input_sends_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let host = setup_host();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(json!({"id": 1}));
    });

    audit(host.path())
        .env("DOTNET_AUDIT_TRACKER_URL", server.base_url())
        .write_stdin("3\n\nPlatform\nsecret\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid organization"))
        .stdout(predicate::str::contains("5. Exit"));

    mock.assert_calls(0);
    Ok(())
}

#[cfg(unix)]
#[test]
fn install_runs_downloaded_script() -> Result<(), Box<dyn std::error::Error>> {
    let host = setup_host();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/dotnet-install.sh");
        then.status(200)
            .body("echo \"installing $4 into $2\"\nmkdir -p \"$2\"\n");
    });
    let dir = host.path().join("sdk");

    audit(host.path())
        .env(
            "DOTNET_AUDIT_INSTALLER_URL",
            server.url("/dotnet-install.sh"),
        )
        .arg("--install-dir")
        .arg(&dir)
        .write_stdin("4\nlts\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed latest .NET (LTS)"));

    assert!(dir.is_dir());
    assert!(!host.path().join("tmp").join("dotnet-install.sh").exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn install_relocates_after_permission_failure() -> Result<(), Box<dyn std::error::Error>> {
    let host = setup_host();
    let denied = host.path().join("locked");
    let relocated = host.path().join("relocated");
    let script = format!(
        "if [ \"$2\" = \"{}\" ]; then echo \"mkdir: cannot create directory: Permission denied\" >&2; exit 1; fi\necho ok\n",
        denied.display()
    );
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(200).body(script.as_str());
    });

    let input = format!("4\n\n{}\n5\n", relocated.display());
    audit(host.path())
        .env("DOTNET_AUDIT_INSTALLER_URL", server.url("/dotnet-install.sh"))
        .arg("--install-dir")
        .arg(&denied)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("No write access"))
        .stdout(predicate::str::contains("Installed latest .NET (STS)"));

    assert!(relocated.is_dir());
    Ok(())
}

#[test]
fn install_download_failure_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let host = setup_host();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(404);
    });

    audit(host.path())
        .env("DOTNET_AUDIT_INSTALLER_URL", server.url("/dotnet-install.sh"))
        .write_stdin("4\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to download"))
        .stdout(predicate::str::contains("5. Exit"));
    Ok(())
}
