// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Enabling and disabling the tuner's frontends in the backend

use crate::error::ControlError;
use tvr_adapters::SchedulerService;
use tvr_core::ParentRef;

/// Two-level walk over the hardware tree: roots, then each root's children.
///
/// Only children receive state updates. Requests are issued one at a time in
/// the order the service lists the nodes; the first failure aborts the walk
/// and leaves earlier updates in place.
pub struct DeviceEnabler<S> {
    service: S,
}

impl<S: SchedulerService> DeviceEnabler<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Returns the number of nodes updated
    pub async fn set_enabled(&self, enabled: bool) -> Result<usize, ControlError> {
        let roots = self.service.device_tree(&ParentRef::Root).await?;
        let mut updated = 0;

        for root in &roots {
            let children = self.service.device_tree(&root.as_parent()).await?;
            for child in &children {
                self.service.set_device_enabled(&child.uuid, enabled).await?;
                tracing::debug!(uuid = %child.uuid, enabled, "updated device node");
                updated += 1;
            }
        }

        tracing::info!(roots = roots.len(), updated, enabled, "device enablement applied");
        Ok(updated)
    }
}

#[cfg(test)]
#[path = "enablement_tests.rs"]
mod tests;
