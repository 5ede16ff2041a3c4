// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cooperative cancellation signal
//!
//! A single [`Cancellation`] is created at process start and cloned into
//! every component that waits. It moves from unset to set exactly once and
//! never resets. Every long wait in the daemon goes through
//! [`Cancellation::wait_timeout`], so a shutdown request is observed at the
//! next wait boundary no matter which wait is active.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Monotonic, process-wide shutdown signal
#[derive(Clone, Debug)]
pub struct Cancellation {
    tx: Arc<watch::Sender<bool>>,
}

impl Cancellation {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Whether cancellation has been requested
    pub fn is_set(&self) -> bool {
        *self.tx.borrow()
    }

    /// Request cancellation. Idempotent.
    pub fn set(&self) {
        self.tx.send_if_modified(|set| {
            if *set {
                false
            } else {
                *set = true;
                true
            }
        });
    }

    /// Wait until cancellation is requested
    pub async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in `self`, so the channel cannot close under us
        let _ = rx.wait_for(|set| *set).await;
    }

    /// Wait up to `timeout`, returning early if cancellation is requested.
    ///
    /// Returns whether the signal is set when the wait ends. Elapsing the
    /// timeout is not an error.
    pub async fn wait_timeout(&self, timeout: Duration) -> bool {
        let _ = tokio::time::timeout(timeout, self.wait()).await;
        self.is_set()
    }
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod tests;
