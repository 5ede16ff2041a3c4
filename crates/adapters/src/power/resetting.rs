// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Power adapter that unloads the tuner driver before cutting power

use super::{PowerAdapter, PowerError};
use crate::reset::ResetAdapter;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Runs the reset before every power-off that may cut a live device.
///
/// The relay state at startup is unknown, so the first power-off always
/// resets. After a completed power-off, repeated power-offs skip the reset
/// until the next power-on.
#[derive(Clone)]
pub struct ResettingPower<P, R> {
    inner: P,
    reset: R,
    maybe_powered: Arc<AtomicBool>,
}

impl<P, R> ResettingPower<P, R> {
    pub fn new(inner: P, reset: R) -> Self {
        Self {
            inner,
            reset,
            maybe_powered: Arc::new(AtomicBool::new(true)),
        }
    }
}

#[async_trait]
impl<P: PowerAdapter, R: ResetAdapter> PowerAdapter for ResettingPower<P, R> {
    async fn power_on(&self) -> Result<(), PowerError> {
        self.maybe_powered.store(true, Ordering::SeqCst);
        self.inner.power_on().await
    }

    async fn power_off(&self) -> Result<(), PowerError> {
        if self.maybe_powered.load(Ordering::SeqCst) {
            self.reset.reset().await?;
        } else {
            tracing::debug!("device already off, skipping driver reset");
        }
        self.inner.power_off().await?;
        self.maybe_powered.store(false, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
#[path = "resetting_tests.rs"]
mod tests;
