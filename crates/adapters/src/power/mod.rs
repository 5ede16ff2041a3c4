// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tuner power adapters

mod relay;
mod resetting;

pub use relay::GpioRelay;
pub use resetting::ResettingPower;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePowerAdapter, PowerCall};

use crate::gpio::GpioError;
use crate::reset::ResetError;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from power operations
#[derive(Debug, Error)]
pub enum PowerError {
    #[error("relay: {0}")]
    Gpio(#[from] GpioError),
    #[error("device reset before power off: {0}")]
    Reset(#[from] ResetError),
}

/// Switches the tuner's supply. Both operations are idempotent.
#[async_trait]
pub trait PowerAdapter: Clone + Send + Sync + 'static {
    async fn power_on(&self) -> Result<(), PowerError>;

    async fn power_off(&self) -> Result<(), PowerError>;
}
