// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rotating file log for the daemon

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::config::{LogRotation, LoggingConfig};
use crate::lifecycle::LifecycleError;

/// Prefix of the first line logged on every start, e.g.
/// `--- tvrd: starting (pid: 12345) ---`
pub const STARTUP_MARKER_PREFIX: &str = "--- tvrd: starting (pid: ";

impl LogRotation {
    fn as_rotation(self) -> Rotation {
        match self {
            LogRotation::Never => Rotation::NEVER,
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Daily => Rotation::DAILY,
        }
    }
}

/// Appender for `log_file`. Rotated files are named `<log_file>.<period>`
/// and only the newest `max_files` are kept. Without rotation the file is
/// `log_file` itself.
pub fn appender(
    log_file: &Path,
    logging: &LoggingConfig,
) -> Result<RollingFileAppender, LifecycleError> {
    let dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = log_file
        .file_name()
        .ok_or(LifecycleError::NoLogDir)?
        .to_string_lossy()
        .into_owned();

    std::fs::create_dir_all(dir)?;

    let mut builder = RollingFileAppender::builder()
        .rotation(logging.rotation.as_rotation())
        .filename_prefix(name);
    if logging.rotation != LogRotation::Never {
        builder = builder.max_log_files(logging.max_files);
    }
    Ok(builder.build(dir)?)
}

/// Install the global subscriber writing through a non-blocking worker.
/// Dropping the guard flushes pending lines.
pub fn setup(log_file: &Path, logging: &LoggingConfig) -> Result<WorkerGuard, LifecycleError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let (non_blocking, guard) = tracing_appender::non_blocking(appender(log_file, logging)?);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    tracing::info!("{}{}) ---", STARTUP_MARKER_PREFIX, std::process::id());
    Ok(guard)
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
