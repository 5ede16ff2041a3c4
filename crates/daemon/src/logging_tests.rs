// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn logging(rotation: LogRotation) -> LoggingConfig {
    LoggingConfig {
        rotation,
        max_files: 2,
    }
}

#[test]
fn unrotated_log_uses_the_configured_name() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("log/status.log");

    let mut appender = appender(&log_file, &logging(LogRotation::Never)).unwrap();
    appender.write_all(b"check done\n").unwrap();
    appender.flush().unwrap();

    assert_eq!(
        std::fs::read_to_string(&log_file).unwrap(),
        "check done\n"
    );
}

#[test]
fn daily_log_gets_a_dated_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("status.log");

    let mut appender = appender(&log_file, &logging(LogRotation::Daily)).unwrap();
    appender.write_all(b"check done\n").unwrap();
    appender.flush().unwrap();

    let names = file_names(dir.path());
    assert_eq!(names.len(), 1, "{names:?}");
    assert!(names[0].starts_with("status.log."), "{names:?}");
    assert!(!log_file.exists());
}

#[test]
fn path_without_file_name_is_rejected() {
    let err = appender(Path::new("/"), &logging(LogRotation::Daily)).unwrap_err();
    assert!(matches!(err, LifecycleError::NoLogDir));
}
