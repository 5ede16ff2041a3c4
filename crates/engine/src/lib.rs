// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tvh-relay control engine
//!
//! Drives the tuner's power and enablement from the recording schedule,
//! one sequential check cycle at a time.

mod availability;
mod controller;
mod enablement;
mod error;
mod maintenance;

pub use availability::{Availability, AvailabilityPoller};
pub use controller::{
    Controller, ControllerConfig, ControllerDeps, CycleOutcome, Phase, RunExit,
};
pub use enablement::DeviceEnabler;
pub use error::{ControlError, ErrorKind};
pub use maintenance::StalenessTracker;
