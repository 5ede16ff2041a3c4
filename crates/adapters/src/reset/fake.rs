// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake reset adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ResetAdapter, ResetError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeResetState {
    resets: usize,
    fail_stderr: Option<String>,
}

/// Fake reset adapter for testing
#[derive(Clone, Default)]
pub struct FakeResetAdapter {
    inner: Arc<Mutex<FakeResetState>>,
}

impl FakeResetAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reset calls, including failed ones
    pub fn resets(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).resets
    }

    /// Make every subsequent reset fail as if the command wrote `stderr`
    pub fn fail_with(&self, stderr: impl Into<String>) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .fail_stderr = Some(stderr.into());
    }
}

#[async_trait]
impl ResetAdapter for FakeResetAdapter {
    async fn reset(&self) -> Result<(), ResetError> {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.resets += 1;
        match &state.fail_stderr {
            Some(stderr) => Err(ResetError::CommandFailed {
                cmd: "modprobe -r fake".to_string(),
                stderr: stderr.clone(),
            }),
            None => Ok(()),
        }
    }
}
