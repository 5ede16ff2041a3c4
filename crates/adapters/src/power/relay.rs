// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Relay on a GPIO line

use super::{PowerAdapter, PowerError};
use crate::gpio::GpioLine;
use async_trait::async_trait;

/// Power relay driven by a GPIO output line
#[derive(Clone, Debug)]
pub struct GpioRelay {
    line: GpioLine,
}

impl GpioRelay {
    /// Configure the line as an output with the relay released
    pub async fn open(line: GpioLine) -> Result<Self, PowerError> {
        line.setup(false).await?;
        tracing::info!(line = line.line(), "relay line configured");
        Ok(Self { line })
    }
}

#[async_trait]
impl PowerAdapter for GpioRelay {
    async fn power_on(&self) -> Result<(), PowerError> {
        self.line.set_active(true).await?;
        Ok(())
    }

    async fn power_off(&self) -> Result<(), PowerError> {
        self.line.set_active(false).await?;
        Ok(())
    }
}
