// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output lines driven through the sysfs GPIO interface

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default sysfs GPIO root
pub const SYSFS_GPIO_ROOT: &str = "/sys/class/gpio";

#[derive(Debug, Error)]
#[error("gpio line {line}: {action} failed: {source}")]
pub struct GpioError {
    pub line: u32,
    pub action: &'static str,
    #[source]
    pub source: std::io::Error,
}

/// A single output line with optional inverted logic
#[derive(Debug, Clone)]
pub struct GpioLine {
    root: PathBuf,
    line: u32,
    active_low: bool,
}

impl GpioLine {
    pub fn new(root: impl Into<PathBuf>, line: u32, active_low: bool) -> Self {
        Self {
            root: root.into(),
            line,
            active_low,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Export the line and configure it as an output at the given logical level
    pub async fn setup(&self, active: bool) -> Result<(), GpioError> {
        if !self.line_dir().exists() {
            self.write(&self.root.join("export"), &self.line.to_string(), "export")
                .await?;
        }

        // "high"/"low" set the direction and the initial level in one write
        let direction = if self.level(active) { "high" } else { "low" };
        self.write(&self.line_dir().join("direction"), direction, "set direction")
            .await
    }

    /// Drive the line to the given logical level
    pub async fn set_active(&self, active: bool) -> Result<(), GpioError> {
        let value = if self.level(active) { "1" } else { "0" };
        self.write(&self.line_dir().join("value"), value, "write value")
            .await
    }

    fn level(&self, active: bool) -> bool {
        active != self.active_low
    }

    fn line_dir(&self) -> PathBuf {
        self.root.join(format!("gpio{}", self.line))
    }

    async fn write(&self, path: &Path, value: &str, action: &'static str) -> Result<(), GpioError> {
        tokio::fs::write(path, value)
            .await
            .map_err(|source| GpioError {
                line: self.line,
                action,
                source,
            })
    }
}

#[cfg(test)]
#[path = "gpio_tests.rs"]
mod tests;
