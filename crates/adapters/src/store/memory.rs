// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory timestamp store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{StoreError, TimestampStore};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MemoryState {
    value: Option<String>,
    writes: usize,
    fail_writes: bool,
}

/// In-memory store shared between clones
#[derive(Clone, Default)]
pub struct MemoryTimestampStore {
    inner: Arc<Mutex<MemoryState>>,
}

impl MemoryTimestampStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let store = Self::new();
        store.inner.lock().unwrap_or_else(|e| e.into_inner()).value = Some(value.into());
        store
    }

    pub fn value(&self) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .value
            .clone()
    }

    /// Number of successful writes
    pub fn writes(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).writes
    }

    pub fn fail_writes(&self) {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).fail_writes = true;
    }
}

#[async_trait]
impl TimestampStore for MemoryTimestampStore {
    async fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.value())
    }

    async fn set(&self, value: &str) -> Result<(), StoreError> {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if state.fail_writes {
            return Err(StoreError::Write {
                path: PathBuf::from("memory"),
                source: std::io::Error::other("injected write failure"),
            });
        }
        state.value = Some(value.to_string());
        state.writes += 1;
        Ok(())
    }
}
