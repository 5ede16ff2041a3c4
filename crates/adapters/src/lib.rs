// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: relay, LED, kernel module, scheduler API, state file

pub mod gpio;
pub mod indicator;
pub mod power;
pub mod reset;
pub mod service;
pub mod store;
pub mod traced;

pub use gpio::{GpioError, GpioLine};
pub use indicator::{ErrorIndicator, GpioIndicator, IndicatorError, NoOpIndicator};
pub use power::{GpioRelay, PowerAdapter, PowerError, ResettingPower};
pub use reset::{KernelModuleReset, NoOpResetAdapter, ResetAdapter, ResetError};
pub use service::{Credentials, SchedulerService, ServiceError, TvheadendClient};
pub use store::{FileTimestampStore, StoreError, TimestampStore};
pub use traced::{TracedPower, TracedService};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use indicator::FakeIndicator;
#[cfg(any(test, feature = "test-support"))]
pub use power::{FakePowerAdapter, PowerCall};
#[cfg(any(test, feature = "test-support"))]
pub use reset::FakeResetAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use service::{FakeSchedulerService, ServiceCall};
#[cfg(any(test, feature = "test-support"))]
pub use store::MemoryTimestampStore;
