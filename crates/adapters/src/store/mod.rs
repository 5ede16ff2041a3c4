// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable storage for the single maintenance timestamp

mod file;

pub use file::FileTimestampStore;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod memory;
#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryTimestampStore;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Text value store. A missing value is `None`, not an error.
#[async_trait]
pub trait TimestampStore: Clone + Send + Sync + 'static {
    async fn get(&self) -> Result<Option<String>, StoreError>;

    /// Replace the stored value. Either the whole value lands or the error
    /// propagates and the previous value stays readable.
    async fn set(&self, value: &str) -> Result<(), StoreError>;
}
