// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tuner driver reset adapters

mod modprobe;
mod noop;

pub use modprobe::KernelModuleReset;
pub use noop::NoOpResetAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeResetAdapter;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from reset operations
#[derive(Debug, Error)]
pub enum ResetError {
    #[error("failed to run {cmd}: {source}")]
    Spawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },
    #[error("command failed: {cmd} - {stderr}")]
    CommandFailed { cmd: String, stderr: String },
}

/// Releases the tuner driver so the device can lose power safely
#[async_trait]
pub trait ResetAdapter: Clone + Send + Sync + 'static {
    async fn reset(&self) -> Result<(), ResetError>;
}
