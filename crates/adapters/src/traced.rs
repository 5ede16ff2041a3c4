// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::power::{PowerAdapter, PowerError};
use crate::service::{SchedulerService, ServiceError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::Instrument;
use tvr_core::{DeviceNode, ParentRef, ScheduleEntry};

/// Wrapper that adds tracing to any PowerAdapter
#[derive(Clone)]
pub struct TracedPower<P> {
    inner: P,
}

impl<P> TracedPower<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: PowerAdapter> PowerAdapter for TracedPower<P> {
    async fn power_on(&self) -> Result<(), PowerError> {
        async {
            let start = std::time::Instant::now();
            let result = self.inner.power_on().await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "relay on"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "power on failed"),
            }

            result
        }
        .instrument(tracing::info_span!("power.on"))
        .await
    }

    async fn power_off(&self) -> Result<(), PowerError> {
        async {
            let start = std::time::Instant::now();
            let result = self.inner.power_off().await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "relay off"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "power off failed"),
            }

            result
        }
        .instrument(tracing::info_span!("power.off"))
        .await
    }
}

/// Wrapper that adds tracing to any SchedulerService
#[derive(Clone)]
pub struct TracedService<S> {
    inner: S,
}

impl<S> TracedService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: SchedulerService> SchedulerService for TracedService<S> {
    async fn upcoming_entries(&self) -> Result<Vec<ScheduleEntry>, ServiceError> {
        async {
            let start = std::time::Instant::now();
            let result = self.inner.upcoming_entries().await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(entries) => {
                    tracing::debug!(count = entries.len(), elapsed_ms, "fetched upcoming entries")
                }
                Err(e) => tracing::error!(elapsed_ms, error = %e, "fetch failed"),
            }

            result
        }
        .instrument(tracing::info_span!("service.upcoming"))
        .await
    }

    async fn trigger_maintenance(&self, settle: Duration) -> Result<(), ServiceError> {
        async {
            let result = self.inner.trigger_maintenance(settle).await;
            match &result {
                Ok(()) => tracing::info!("guide scan triggered"),
                Err(e) => tracing::error!(error = %e, "trigger failed"),
            }
            result
        }
        .instrument(tracing::info_span!(
            "service.trigger",
            settle_secs = settle.as_secs()
        ))
        .await
    }

    async fn device_tree(&self, parent: &ParentRef) -> Result<Vec<DeviceNode>, ServiceError> {
        let result = self.inner.device_tree(parent).await;
        tracing::trace!(
            %parent,
            count = result.as_ref().map(|v| v.len()).ok(),
            "listed devices"
        );
        result
    }

    async fn set_device_enabled(&self, uuid: &str, enabled: bool) -> Result<(), ServiceError> {
        async {
            let result = self.inner.set_device_enabled(uuid, enabled).await;
            match &result {
                Ok(()) => tracing::info!("enabled state saved"),
                Err(e) => tracing::error!(error = %e, "save failed"),
            }
            result
        }
        .instrument(tracing::info_span!("service.set_enabled", uuid, enabled))
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
