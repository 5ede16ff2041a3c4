// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[tokio::test]
async fn setup_exports_missing_line() {
    let root = tempfile::tempdir().unwrap();
    let line = GpioLine::new(root.path(), 17, false);

    // export is a write-only sysfs file; direction fails since no kernel creates gpio17
    let err = line.setup(false).await.unwrap_err();

    assert_eq!(read(&root.path().join("export")), "17");
    assert_eq!(err.action, "set direction");
}

#[tokio::test]
async fn active_low_line_inverts_levels() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir(root.path().join("gpio4")).unwrap();
    let line = GpioLine::new(root.path(), 4, true);

    line.setup(false).await.unwrap();
    assert_eq!(read(&root.path().join("gpio4/direction")), "high");
    assert!(!root.path().join("export").exists());

    line.set_active(true).await.unwrap();
    assert_eq!(read(&root.path().join("gpio4/value")), "0");

    line.set_active(false).await.unwrap();
    assert_eq!(read(&root.path().join("gpio4/value")), "1");
}

#[tokio::test]
async fn active_high_line_follows_levels() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir(root.path().join("gpio27")).unwrap();
    let line = GpioLine::new(root.path(), 27, false);

    line.setup(false).await.unwrap();
    assert_eq!(read(&root.path().join("gpio27/direction")), "low");

    line.set_active(true).await.unwrap();
    assert_eq!(read(&root.path().join("gpio27/value")), "1");
}

#[tokio::test]
async fn write_failure_names_the_line() {
    let root = tempfile::tempdir().unwrap();
    let line = GpioLine::new(root.path().join("missing"), 9, false);

    let err = line.set_active(true).await.unwrap_err();

    assert_eq!(err.line, 9);
    assert!(err.to_string().contains("gpio line 9"));
}
