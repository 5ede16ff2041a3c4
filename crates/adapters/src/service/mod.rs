// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording scheduler API adapters

mod tvheadend;

pub use tvheadend::{Credentials, TvheadendClient};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSchedulerService, ServiceCall};

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tvr_core::{DeviceNode, ParentRef, ScheduleEntry};

/// Errors from scheduler API calls
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },
    #[error("malformed response from {endpoint}: {message}")]
    Malformed { endpoint: String, message: String },
}

impl ServiceError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, ServiceError::Malformed { .. })
    }
}

/// The subset of the recording scheduler's API the controller relies on
#[async_trait]
pub trait SchedulerService: Clone + Send + Sync + 'static {
    /// Upcoming and active recording entries
    async fn upcoming_entries(&self) -> Result<Vec<ScheduleEntry>, ServiceError>;

    /// Start an over-the-air guide scan expected to take `settle`
    async fn trigger_maintenance(&self, settle: Duration) -> Result<(), ServiceError>;

    /// Direct children of `parent` in the hardware tree
    async fn device_tree(&self, parent: &ParentRef) -> Result<Vec<DeviceNode>, ServiceError>;

    /// Set a device node's enabled flag
    async fn set_device_enabled(&self, uuid: &str, enabled: bool) -> Result<(), ServiceError>;
}
