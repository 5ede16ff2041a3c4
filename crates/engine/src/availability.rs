// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Waiting for the tuner to appear in the backend after power-on

use crate::error::ControlError;
use std::time::Duration;
use tvr_adapters::SchedulerService;
use tvr_core::{Cancellation, ParentRef};

/// Result of waiting for the tuner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    /// Shutdown was requested before the device showed up
    Cancelled,
}

/// Polls the hardware tree until at least one root device is present
pub struct AvailabilityPoller<S> {
    service: S,
    interval: Duration,
}

impl<S: SchedulerService> AvailabilityPoller<S> {
    pub fn new(service: S, interval: Duration) -> Self {
        Self { service, interval }
    }

    /// Retries "not present" without bound. Remote errors are not retried.
    pub async fn wait_until_available(
        &self,
        cancel: &Cancellation,
    ) -> Result<Availability, ControlError> {
        let mut attempts = 0u32;
        loop {
            let roots = self.service.device_tree(&ParentRef::Root).await?;
            attempts += 1;

            if !roots.is_empty() {
                tracing::info!(devices = roots.len(), attempts, "tuner available");
                return Ok(Availability::Available);
            }

            tracing::info!(
                attempts,
                retry_in = ?self.interval,
                "tuner not present yet"
            );
            if cancel.wait_timeout(self.interval).await {
                tracing::info!("stopped waiting for tuner, shutdown requested");
                return Ok(Availability::Cancelled);
            }
        }
    }
}

#[cfg(test)]
#[path = "availability_tests.rs"]
mod tests;
