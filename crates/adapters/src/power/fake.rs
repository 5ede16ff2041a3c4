// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake power adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PowerAdapter, PowerError};
use crate::gpio::GpioError;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Recorded power call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCall {
    On,
    Off,
}

#[derive(Default)]
struct FakePowerState {
    calls: Vec<PowerCall>,
    powered: bool,
    fail_message: Option<String>,
}

/// Fake power adapter for testing
#[derive(Clone, Default)]
pub struct FakePowerAdapter {
    inner: Arc<Mutex<FakePowerState>>,
}

impl FakePowerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<PowerCall> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Whether the last successful call left the device powered
    pub fn is_powered(&self) -> bool {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).powered
    }

    /// Make every subsequent call fail with the given message
    pub fn fail_with(&self, message: impl Into<String>) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .fail_message = Some(message.into());
    }

    fn record(&self, call: PowerCall) -> Result<(), PowerError> {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(call);
        if let Some(message) = &state.fail_message {
            return Err(PowerError::Gpio(GpioError {
                line: 0,
                action: "fake switch",
                source: std::io::Error::other(message.clone()),
            }));
        }
        state.powered = call == PowerCall::On;
        Ok(())
    }
}

#[async_trait]
impl PowerAdapter for FakePowerAdapter {
    async fn power_on(&self) -> Result<(), PowerError> {
        self.record(PowerCall::On)
    }

    async fn power_off(&self) -> Result<(), PowerError> {
        self.record(PowerCall::Off)
    }
}
