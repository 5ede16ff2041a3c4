// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box tests for the tvrd binary's startup path

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &Path, tvheadend_password: &str) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    let text = format!(
        r#"
[gpio]
chip_path = "{gpio}"
relay_line = 17
error_led_line = 27

[tvheadend]
url = "http://127.0.0.1:9"
username = "relay"
password = "{tvheadend_password}"

[paths]
state_file = "{state}"
log_file = "{log}"

[logging]
rotation = "never"
"#,
        gpio = dir.join("gpio").display(),
        state = dir.join("state/last-epg-check").display(),
        log = dir.join("log/status.log").display(),
    );
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn missing_config_fails_with_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    Command::cargo_bin("tvrd")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn empty_password_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "");

    Command::cargo_bin("tvrd")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("credentials"));

    assert!(!temp.path().join("log/status.log").exists());
}

#[test]
fn unparseable_config_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[gpio\nrelay_line = ").unwrap();

    Command::cargo_bin("tvrd")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse"));
}

#[test]
fn unusable_gpio_is_logged_after_startup_marker() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("gpio")).unwrap();
    let path = write_config(temp.path(), "secret");

    Command::cargo_bin("tvrd")
        .unwrap()
        .arg(&path)
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure();

    let log = std::fs::read_to_string(temp.path().join("log/status.log")).unwrap();
    let marker = log.find("--- tvrd: starting (pid: ").expect("startup marker");
    let failure = log.find("failed to start").expect("startup error");
    assert!(marker < failure);
    assert!(log.contains("gpio line 17"));
    assert!(log.contains("ERROR"));
}

#[test]
fn default_rotation_writes_dated_log_files() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("gpio")).unwrap();
    let path = write_config(temp.path(), "secret");
    let text = std::fs::read_to_string(&path)
        .unwrap()
        .replace("rotation = \"never\"", "");
    std::fs::write(&path, text).unwrap();

    Command::cargo_bin("tvrd")
        .unwrap()
        .arg(&path)
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure();

    let names: Vec<String> = std::fs::read_dir(temp.path().join("log"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1, "{names:?}");
    assert!(names[0].starts_with("status.log."), "{names:?}");
}
