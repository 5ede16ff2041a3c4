// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Out-of-band error indicator (status LED)

use crate::gpio::{GpioError, GpioLine};
use async_trait::async_trait;
use thiserror::Error;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeIndicator;

/// Errors from indicator operations
#[derive(Debug, Error)]
pub enum IndicatorError {
    #[error("error led: {0}")]
    Gpio(#[from] GpioError),
}

/// Visible signal that the daemon stopped on a fatal error. Write-only.
#[async_trait]
pub trait ErrorIndicator: Clone + Send + Sync + 'static {
    async fn engage(&self) -> Result<(), IndicatorError>;
}

/// LED on a GPIO output line, off until engaged
#[derive(Clone, Debug)]
pub struct GpioIndicator {
    line: GpioLine,
}

impl GpioIndicator {
    pub async fn open(line: GpioLine) -> Result<Self, IndicatorError> {
        line.setup(false).await?;
        tracing::info!(line = line.line(), "error led line configured");
        Ok(Self { line })
    }
}

#[async_trait]
impl ErrorIndicator for GpioIndicator {
    async fn engage(&self) -> Result<(), IndicatorError> {
        self.line.set_active(true).await?;
        Ok(())
    }
}

/// Indicator that does nothing, for setups without an LED
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpIndicator;

#[async_trait]
impl ErrorIndicator for NoOpIndicator {
    async fn engage(&self) -> Result<(), IndicatorError> {
        Ok(())
    }
}
